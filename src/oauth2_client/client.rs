// ABOUTME: OAuth2 client implementation for Jawbone UP authentication
// ABOUTME: Builds login URLs, exchanges codes and refreshes tokens over reqwest
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{OAuth2Client, OAuthClientError};
use crate::config::HttpClientConfig;
use crate::token_store::TokenStore;
use crate::utils::http_client::{create_client_with_timeout, oauth_client};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jawbone_core::constants::{oauth, time::DEFAULT_TOKEN_EXPIRY_SECONDS};
use jawbone_core::AccessToken;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// OAuth 2.0 client configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OAuth2Config {
    /// OAuth client ID from provider
    pub client_id: String,
    /// OAuth client secret from provider
    pub client_secret: String,
    /// Authorization endpoint URL
    pub auth_url: String,
    /// Token endpoint URL
    pub token_url: String,
    /// Redirect URI for OAuth callbacks
    pub redirect_uri: String,
    /// OAuth scopes to request
    pub scopes: Vec<String>,
}

impl fmt::Debug for OAuth2Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuth2Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("auth_url", &self.auth_url)
            .field("token_url", &self.token_url)
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .finish()
    }
}

/// OAuth 2.0 client for the Jawbone UP API
///
/// Every token obtained through [`OAuth2Client::exchange_code`] or
/// [`OAuth2Client::refresh`] is saved into the token store under the
/// client's provider key before it is returned.
pub struct HttpOAuth2Client {
    config: OAuth2Config,
    provider_key: String,
    storage: Arc<dyn TokenStore>,
    client: reqwest::Client,
}

impl HttpOAuth2Client {
    /// Create a new `OAuth2` client with the default OAuth timeouts
    #[must_use]
    pub fn new(
        config: OAuth2Config,
        provider_key: impl Into<String>,
        storage: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            config,
            provider_key: provider_key.into(),
            storage,
            client: oauth_client(),
        }
    }

    /// Replace the HTTP client with one using the given timeouts
    #[must_use]
    pub fn with_timeouts(mut self, http: HttpClientConfig) -> Self {
        self.client = create_client_with_timeout(http.timeout_secs, http.connect_timeout_secs);
        self
    }

    /// Get the `OAuth2` configuration
    #[must_use]
    pub const fn config(&self) -> &OAuth2Config {
        &self.config
    }

    /// Provider key tokens are stored under
    #[must_use]
    pub fn provider_key(&self) -> &str {
        &self.provider_key
    }

    /// Post a grant to the token endpoint and decode the token response
    async fn request_token(
        &self,
        params: &[(&str, &str)],
    ) -> Result<TokenResponse, OAuthClientError> {
        let response = self
            .client
            .post(&self.config.token_url)
            .form(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                provider_key = %self.provider_key,
                status = status.as_u16(),
                "Token endpoint rejected the request"
            );
            return Err(OAuthClientError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }

    /// Persist a freshly obtained token under the provider key
    async fn store(&self, token: &AccessToken) -> Result<(), OAuthClientError> {
        self.storage.save_token(&self.provider_key, token).await?;
        Ok(())
    }

    fn token_from_response(
        &self,
        response: TokenResponse,
        previous_refresh_token: Option<&str>,
    ) -> AccessToken {
        AccessToken {
            access_token: response.access_token,
            token_type: response
                .token_type
                .unwrap_or_else(|| oauth::DEFAULT_TOKEN_TYPE.to_owned()),
            expires_at: response.expires_in.map(|seconds| expiry_after(Utc::now(), seconds)),
            // Providers may omit the refresh token on refresh; the old one stays valid
            refresh_token: response
                .refresh_token
                .or_else(|| previous_refresh_token.map(ToOwned::to_owned)),
            scope: response.scope,
            provider: self.provider_key.clone(),
        }
    }
}

#[async_trait]
impl OAuth2Client for HttpOAuth2Client {
    fn authorization_uri(&self) -> Result<String, OAuthClientError> {
        let mut url = Url::parse(&self.config.auth_url)?;

        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", oauth::RESPONSE_TYPE_CODE)
            .append_pair("scope", &self.config.scopes.join(" "));

        Ok(url.to_string())
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthClientError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("code", code),
            ("grant_type", oauth::GRANT_AUTHORIZATION_CODE),
            ("redirect_uri", self.config.redirect_uri.as_str()),
        ];

        let response = self.request_token(&params).await?;
        let token = self.token_from_response(response, None);
        self.store(&token).await?;

        info!(
            provider_key = %self.provider_key,
            expires_at = ?token.expires_at,
            "Exchanged authorization code for access token"
        );
        Ok(token)
    }

    async fn refresh(&self, token: &AccessToken) -> Result<AccessToken, OAuthClientError> {
        let refresh_token = token
            .refresh_token
            .as_deref()
            .ok_or(OAuthClientError::MissingRefreshToken)?;

        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", oauth::GRANT_REFRESH_TOKEN),
        ];

        debug!(provider_key = %self.provider_key, "Refreshing access token");
        let response = self.request_token(&params).await?;
        let renewed = self.token_from_response(response, Some(refresh_token));
        self.store(&renewed).await?;

        info!(
            provider_key = %self.provider_key,
            expires_at = ?renewed.expires_at,
            "Refreshed access token"
        );
        Ok(renewed)
    }
}

/// Expiry instant for a token issued at `issued_at` with a lifetime of `seconds`
///
/// Lifetimes that do not fit a timestamp fall back to the default expiry.
fn expiry_after(issued_at: DateTime<Utc>, seconds: u64) -> DateTime<Utc> {
    let default_lifetime = Duration::seconds(DEFAULT_TOKEN_EXPIRY_SECONDS);
    let lifetime = i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(default_lifetime);

    issued_at
        .checked_add_signed(lifetime)
        .unwrap_or(issued_at + default_lifetime)
}

/// OAuth 2.0 token response from provider
#[derive(Debug, Deserialize)]
struct TokenResponse {
    /// The access token issued by the authorization server
    access_token: String,
    /// The type of token (usually "Bearer")
    token_type: Option<String>,
    /// Token lifetime in seconds
    expires_in: Option<u64>,
    /// Refresh token for obtaining new access tokens
    refresh_token: Option<String>,
    /// Space-separated list of granted scopes
    scope: Option<String>,
}
