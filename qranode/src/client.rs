// SPDX-License-Identifier: MIT
//
// QRANode: Client for the ANU Quantum Random Numbers API
//
// https://github.com/yourusername/qranode

//! HTTPS client for the ANU Quantum Random Numbers API
//!
//! One validated GET per call: no retries, no caching and no client-side
//! timeout beyond the transport defaults.

use crate::{
    config::ClientConfig,
    request::{RequestOptions, ValidatedRequest},
    response::ApiResponse,
    Error, Result,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");
const USER_AGENT_HEADER: HeaderName = HeaderName::from_static("x-user-agent");

/// Client bound to one API key and user agent
///
/// Cheap to clone; clones share the underlying connection pool. Concurrent
/// calls are independent of each other.
#[derive(Debug, Clone)]
pub struct QrngClient {
    client: Client,
    config: ClientConfig,
    base_url: Url,
}

impl QrngClient {
    /// Create a new client with configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let client = ClientBuilder::new()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .use_rustls_tls()
            .build()
            .map_err(Error::Network)?;

        let this = Self {
            client,
            config,
            base_url,
        };
        // Surface unsendable header values now rather than on the first call
        this.build_headers()?;
        Ok(this)
    }

    /// Bind an API key and optional user agent against the public endpoint
    ///
    /// Fails with [`Error::MissingApiKey`] when `api_key` is empty.
    pub fn configure(api_key: &str, user_agent: Option<&str>) -> Result<Self> {
        let mut config = ClientConfig::new(api_key);
        if let Some(user_agent) = user_agent {
            config = config.with_user_agent(user_agent);
        }
        Self::new(config)
    }

    /// Fetch random numbers from the API
    ///
    /// Arguments are validated before any request is made. The API key was
    /// already checked when the client was built. A reply without a truthy
    /// `success` flag becomes [`Error::Upstream`]; any other reply is returned
    /// unchanged.
    #[instrument(skip(self, options), fields(data_type = %options.data_type, amount = options.amount))]
    pub async fn fetch_random_numbers(&self, options: &RequestOptions) -> Result<ApiResponse> {
        let request = options.validate()?;
        let url = self.build_request_url(&request);
        let headers = self.build_headers()?;

        debug!("Requesting {} {} value(s) from {}", request.amount, request.data_type, url);

        let response = self
            .client
            .get(url.clone())
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to fetch from {}: {}", url, e);
                Error::Network(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Network)?;
        debug!("HTTP {} with {} byte body", status, body.len());

        ApiResponse::from_body(&body).map_err(|e| {
            if e.is_upstream_error() {
                warn!("Upstream reported failure (HTTP {})", status);
            }
            e
        })
    }

    /// Build request URL with `type`, `length` and optional `size`
    fn build_request_url(&self, request: &ValidatedRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().extend_pairs(request.query_pairs());
        url
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let api_key = HeaderValue::from_str(&self.config.api_key)
            .map_err(|e| Error::Config(format!("Invalid API key header value: {}", e)))?;
        headers.insert(API_KEY_HEADER, api_key);

        let user_agent = HeaderValue::from_str(&self.config.effective_user_agent())
            .map_err(|e| Error::Config(format!("Invalid user agent header value: {}", e)))?;
        headers.insert(USER_AGENT_HEADER, user_agent);

        Ok(headers)
    }

    /// Get client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// One-shot request without a configured client
///
/// Builds a throwaway [`QrngClient`] and delegates to
/// [`QrngClient::fetch_random_numbers`].
#[deprecated(note = "use `QrngClient::configure` and `QrngClient::fetch_random_numbers` instead")]
pub async fn get_random_numbers(
    options: &RequestOptions,
    api_key: &str,
    user_agent: Option<&str>,
) -> Result<ApiResponse> {
    warn!("get_random_numbers is deprecated");
    QrngClient::configure(api_key, user_agent)?
        .fetch_random_numbers(options)
        .await
}
