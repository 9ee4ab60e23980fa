// SPDX-License-Identifier: MIT
//
// QRANode: Client for the ANU Quantum Random Numbers API
//
// https://github.com/yourusername/qranode

//! Error types for the QRANode client
//!
//! Provides a unified error taxonomy using `thiserror` for ergonomic error handling.
//! Validation failures are always raised before any request leaves the process.

pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for QRANode operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API key was supplied, either at configuration or at call time
    #[error("The 'apiKey' argument is required.")]
    MissingApiKey,

    /// Configuration validation failed
    #[error("Configuration error: {0}")]
    Config(String),

    /// An argument has the wrong shape or is not one of the accepted values
    #[error("{0}")]
    InvalidParameter(String),

    /// A numeric argument is outside its documented bounds
    #[error("{0}")]
    OutOfRange(String),

    /// The server answered, but did not report success
    #[error("failed response from server: {body}")]
    Upstream {
        /// The full response, serialized back to JSON
        body: String,
    },

    /// Network communication failed
    #[error(transparent)]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Check if error was raised by local argument validation
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::InvalidParameter(_) | Error::OutOfRange(_))
    }

    /// Check if error indicates a configuration problem
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::MissingApiKey | Error::Config(_))
    }

    /// Check if error came from the upstream API itself
    pub fn is_upstream_error(&self) -> bool {
        matches!(self, Error::Upstream { .. })
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Config(format!("Invalid base URL: {}", e))
    }
}
