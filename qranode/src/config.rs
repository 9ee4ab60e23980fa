// SPDX-License-Identifier: MIT
//
// QRANode: Client for the ANU Quantum Random Numbers API
//
// https://github.com/yourusername/qranode

//! Configuration management for the QRANode client

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Client configuration, fixed for the lifetime of a [`crate::QrngClient`]
#[derive(Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// API key sent as `x-api-key`
    #[serde(default)]
    pub api_key: String,

    /// Custom `x-user-agent`; defaults to the crate name and version
    #[serde(default)]
    pub user_agent: Option<String>,

    /// API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

// The API key stays out of logs and panic messages.
impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("user_agent", &self.user_agent)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            user_agent: None,
            base_url: default_base_url(),
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Point the client at a different endpoint (e.g. a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::MissingApiKey);
        }

        self.parsed_base_url()?;

        if matches!(&self.user_agent, Some(ua) if ua.is_empty()) {
            return Err(Error::Config("user_agent cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn parsed_base_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// The user agent actually sent upstream
    pub fn effective_user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(crate::default_user_agent)
    }
}

fn default_base_url() -> String {
    crate::BASE_URL.to_string()
}
