// ABOUTME: Shared HTTP client utilities with timeout configuration
// ABOUTME: Builds reqwest clients tuned for OAuth token endpoint calls

use jawbone_core::constants::network::{OAUTH_CONNECT_TIMEOUT_SECS, OAUTH_REQUEST_TIMEOUT_SECS};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a new HTTP client with custom timeout settings
///
/// # Arguments
/// * `timeout_secs` - Request timeout in seconds
/// * `connect_timeout_secs` - Connection timeout in seconds
///
/// # Returns
/// A new `reqwest::Client` with custom timeouts, or a default client if the
/// builder rejects the configuration
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Create a new HTTP client optimized for OAuth flows
///
/// Token exchanges should be fast, so the timeouts are short.
#[must_use]
pub fn oauth_client() -> Client {
    create_client_with_timeout(OAUTH_REQUEST_TIMEOUT_SECS, OAUTH_CONNECT_TIMEOUT_SECS)
}
