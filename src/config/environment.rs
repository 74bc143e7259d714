// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses provider credentials, endpoints, provider key and HTTP timeouts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::oauth2_client::OAuth2Config;
use anyhow::{anyhow, Context, Result};
use jawbone_core::constants::{jawbone, network, providers};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;
use url::Url;

/// Timeouts applied to token endpoint requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: network::OAUTH_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: network::OAUTH_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Complete gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Token store key of this integration
    pub provider_key: String,
    /// OAuth 2.0 client settings
    pub oauth: OAuth2Config,
    /// HTTP client timeouts
    pub http: HttpClientConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, a timeout is not a
    /// number, or an endpoint URL does not parse
    pub fn from_env() -> Result<Self> {
        info!("Loading gateway configuration from environment variables");

        let config = Self {
            provider_key: env_var_or("JAWBONE_PROVIDER_KEY", providers::JAWBONE_UP),
            oauth: OAuth2Config {
                client_id: env::var("JAWBONE_CLIENT_ID")
                    .context("JAWBONE_CLIENT_ID is required")?,
                client_secret: env::var("JAWBONE_CLIENT_SECRET")
                    .context("JAWBONE_CLIENT_SECRET is required")?,
                auth_url: env_var_or("JAWBONE_AUTH_URL", jawbone::AUTH_URL),
                token_url: env_var_or("JAWBONE_TOKEN_URL", jawbone::TOKEN_URL),
                redirect_uri: env::var("JAWBONE_REDIRECT_URI")
                    .context("JAWBONE_REDIRECT_URI is required")?,
                scopes: env::var("JAWBONE_SCOPES").map_or_else(
                    |_| default_scopes(),
                    |scopes| parse_scopes(&scopes),
                ),
            },
            http: HttpClientConfig {
                timeout_secs: env_var_or(
                    "JAWBONE_HTTP_TIMEOUT_SECS",
                    &network::OAUTH_REQUEST_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid JAWBONE_HTTP_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    "JAWBONE_HTTP_CONNECT_TIMEOUT_SECS",
                    &network::OAUTH_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid JAWBONE_HTTP_CONNECT_TIMEOUT_SECS value")?,
            },
        };

        config.validate()?;
        info!("Gateway configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the provider key or a credential is empty, or an
    /// endpoint is not a valid URL
    pub fn validate(&self) -> Result<()> {
        if self.provider_key.trim().is_empty() {
            return Err(anyhow!("JAWBONE_PROVIDER_KEY cannot be empty"));
        }
        if self.oauth.client_id.trim().is_empty() || self.oauth.client_secret.trim().is_empty() {
            return Err(anyhow!("Jawbone client_id and client_secret cannot be empty"));
        }

        Url::parse(&self.oauth.auth_url).context("Invalid JAWBONE_AUTH_URL")?;
        Url::parse(&self.oauth.token_url).context("Invalid JAWBONE_TOKEN_URL")?;
        Url::parse(&self.oauth.redirect_uri).context("Invalid JAWBONE_REDIRECT_URI")?;

        if self.http.timeout_secs == 0 {
            return Err(anyhow!("JAWBONE_HTTP_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Jawbone UP Gateway Configuration:\n\
             - Provider Key: {}\n\
             - Authorization URL: {}\n\
             - Token URL: {}\n\
             - Redirect URI: {}\n\
             - Scopes: {}\n\
             - HTTP Timeout: {}s (connect {}s)",
            self.provider_key,
            self.oauth.auth_url,
            self.oauth.token_url,
            self.oauth.redirect_uri,
            self.oauth.scopes.join(" "),
            self.http.timeout_secs,
            self.http.connect_timeout_secs,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn default_scopes() -> Vec<String> {
    jawbone::DEFAULT_SCOPES
        .iter()
        .map(|scope| (*scope).to_owned())
        .collect()
}

/// Parse scopes separated by commas or whitespace
fn parse_scopes(scopes_str: &str) -> Vec<String> {
    scopes_str
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}
