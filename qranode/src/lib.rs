// SPDX-License-Identifier: MIT
//
// QRANode: Client for the ANU Quantum Random Numbers API
//
// https://github.com/yourusername/qranode

//! QRANode Client Library
//!
//! A thin asynchronous client for the ANU Quantum Random Numbers web API
//! (<https://quantumnumbers.anu.edu.au>). The client validates request
//! parameters, issues a single HTTPS GET and interprets the JSON reply.
//!
//! # Architecture
//!
//! - `request`: Data types, caller options and their validation
//! - `response`: Upstream JSON reply model
//! - `config`: Client configuration (API key, user agent, endpoint)
//! - `client`: Configure-once, call-many HTTP client
//! - `error`: Unified error types
//!
//! # Example
//!
//! ```rust,no_run
//! use qranode::{QrngClient, RequestOptions};
//!
//! # async fn run() -> qranode::Result<()> {
//! let client = QrngClient::configure("my-api-key", None)?;
//! let options = RequestOptions::new("hex16").amount(2.0).block_size(4.0);
//! let response = client.fetch_random_numbers(&options).await?;
//! println!("{:?}", response.data());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;

#[allow(deprecated)]
pub use client::get_random_numbers;
pub use client::QrngClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use request::{DataType, RequestOptions, ValidatedRequest};
pub use response::{ApiResponse, Datum};

/// Library version, reported in the default user agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name, reported in the default user agent
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Upstream API endpoint
pub const BASE_URL: &str = "https://api.quantumnumbers.anu.edu.au";

/// Maximum number of values per request
pub const AMOUNT_LIMIT: u16 = 1024;

/// Maximum number of hex chunks per returned block
pub const BLOCK_SIZE_LIMIT: u8 = 10;

/// Data types accepted by the upstream API
pub const VALID_TYPES: [&str; 4] = ["uint8", "uint16", "hex8", "hex16"];

/// User agent sent when the caller does not supply one, e.g. `qranode-v0.1.0`
pub fn default_user_agent() -> String {
    format!("{}-v{}", NAME, VERSION)
}
