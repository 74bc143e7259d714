// ABOUTME: Token lifecycle manager for one provider integration
// ABOUTME: Classifies every collaborator failure into exactly one gateway error kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Token Lifecycle Manager
//!
//! [`AuthenticationGateway`] holds no token state. It reads and writes through
//! the [`TokenStore`] and asks the [`OAuth2Client`] for new tokens, wrapping
//! each collaborator failure at the call site. Nothing is retried.

use super::{AuthorizationResult, LoginRedirect, RefreshOutcome, TokenLifecycle};
use crate::config::GatewayConfig;
use crate::oauth2_client::{HttpOAuth2Client, OAuth2Client};
use crate::token_store::{TokenStore, TokenStoreError};
use async_trait::async_trait;
use jawbone_core::{AccessToken, GatewayError, GatewayResult};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Token lifecycle manager bound to one provider key
pub struct AuthenticationGateway {
    provider_key: String,
    oauth: Arc<dyn OAuth2Client>,
    storage: Arc<dyn TokenStore>,
}

impl AuthenticationGateway {
    /// Create a gateway over the given collaborators
    #[must_use]
    pub fn new(
        provider_key: impl Into<String>,
        oauth: Arc<dyn OAuth2Client>,
        storage: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            provider_key: provider_key.into(),
            oauth,
            storage,
        }
    }

    /// Create a gateway talking to the provider over HTTP
    ///
    /// The HTTP client and the gateway share `storage`, so tokens the client
    /// obtains are the tokens the gateway reads back.
    #[must_use]
    pub fn from_config(config: &GatewayConfig, storage: Arc<dyn TokenStore>) -> Self {
        let oauth = HttpOAuth2Client::new(
            config.oauth.clone(),
            config.provider_key.clone(),
            Arc::clone(&storage),
        )
        .with_timeouts(config.http);

        Self::new(config.provider_key.clone(), Arc::new(oauth), storage)
    }

    /// Provider key this gateway reads and writes tokens under
    #[must_use]
    pub fn provider_key(&self) -> &str {
        &self.provider_key
    }

    /// Determine if the user is authorized with the provider
    ///
    /// Returns exactly what the token store reports.
    ///
    /// # Errors
    ///
    /// Returns a `Storage` error if the token store cannot be queried
    pub async fn is_authorized(&self) -> GatewayResult<bool> {
        self.storage
            .has_token(&self.provider_key)
            .await
            .map_err(|e| {
                warn!(provider_key = %self.provider_key, error = %e, "Could not query token store");
                GatewayError::storage(e)
            })
    }

    /// Refresh the stored token if it has expired
    ///
    /// An unexpired token (or one without expiry) is left untouched and the
    /// provider is not contacted. An expired token is handed to the OAuth
    /// client, which stores the renewed token.
    ///
    /// # Errors
    ///
    /// Returns a `Refresh` error if no token can be retrieved or the refresh call fails
    pub async fn refresh_token_if_required(&self) -> GatewayResult<RefreshOutcome> {
        let token = self
            .storage
            .retrieve_token(&self.provider_key)
            .await
            .map_err(|e| {
                warn!(provider_key = %self.provider_key, error = %e, "Could not retrieve access token");
                GatewayError::refresh(e)
            })?;

        if !token.is_expired() {
            if token.will_expire_soon() {
                debug!(provider_key = %self.provider_key, expires_at = ?token.expires_at, "Access token expires soon");
            }
            debug!(provider_key = %self.provider_key, "Access token still valid, refresh not needed");
            return Ok(RefreshOutcome::NotNeeded);
        }

        self.renew(&token).await?;
        Ok(RefreshOutcome::Refreshed)
    }

    /// Hand an expired token to the OAuth client, which stores the renewed one
    async fn renew(&self, token: &AccessToken) -> GatewayResult<AccessToken> {
        if !token.is_refreshable() {
            warn!(provider_key = %self.provider_key, "Expired access token carries no refresh token");
        }
        info!(provider_key = %self.provider_key, "Access token expired, refreshing");
        self.oauth.refresh(token).await.map_err(|e| {
            warn!(provider_key = %self.provider_key, error = %e, "Access token refresh failed");
            GatewayError::refresh(e)
        })
    }

    /// Authenticate the user by exchanging the authorization code
    ///
    /// The code is passed through as-is; validating it is the provider's job.
    ///
    /// # Errors
    ///
    /// Returns an `Authentication` error if the exchange fails
    pub async fn authenticate_user(&self, code: &str) -> GatewayResult<AccessToken> {
        self.oauth.exchange_code(code).await.map_err(|e| {
            warn!(provider_key = %self.provider_key, error = %e, "Authorization code exchange failed");
            GatewayError::authentication(e)
        })
    }

    /// Reset the session by clearing the stored token
    ///
    /// # Errors
    ///
    /// Returns a `SessionReset` error if the token store fails to clear
    pub async fn reset_session(&self) -> GatewayResult<()> {
        self.storage.clear(&self.provider_key).await.map_err(|e| {
            warn!(provider_key = %self.provider_key, error = %e, "Could not clear access token");
            GatewayError::session_reset(e)
        })?;

        info!(provider_key = %self.provider_key, "Session reset");
        Ok(())
    }

    /// Require an authorized session
    ///
    /// # Errors
    ///
    /// Returns a `Verification` error if no token is stored, or a `Storage`
    /// error if the token store cannot be queried
    pub async fn verify_token(&self) -> GatewayResult<bool> {
        TokenLifecycle::verify_token(self).await
    }

    /// Compute the validated provider login URL
    ///
    /// Issuing the redirect is left to the web layer.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLoginUrl` error (kind `Authentication`) if the
    /// OAuth client cannot build a URL or builds one that does not validate
    pub fn initiate_login(&self) -> GatewayResult<LoginRedirect> {
        let uri = self
            .oauth
            .authorization_uri()
            .map_err(GatewayError::login_url_unavailable)?;

        LoginRedirect::from_authorization_uri(&uri).inspect_err(|e| {
            warn!(provider_key = %self.provider_key, error = %e, "Provider returned an invalid login URL");
        })
    }

    /// Answer whether the user is currently authenticated
    ///
    /// Reads the store once. An expired token is refreshed on the way, so an
    /// `Authorized` answer carries the renewed token the OAuth client stored.
    pub async fn authorization_status(&self) -> AuthorizationResult {
        match self.current_token().await {
            Ok(Some(token)) => AuthorizationResult::Authorized(token),
            Ok(None) => AuthorizationResult::Unauthorized,
            Err(e) => AuthorizationResult::Error(e),
        }
    }

    /// One store read; a missing token is `None`, an expired one is renewed
    async fn current_token(&self) -> GatewayResult<Option<AccessToken>> {
        let token = match self.storage.retrieve_token(&self.provider_key).await {
            Ok(token) => token,
            Err(TokenStoreError::NotFound(_)) => return Ok(None),
            Err(e) => {
                warn!(provider_key = %self.provider_key, error = %e, "Could not query token store");
                return Err(GatewayError::storage(e));
            }
        };

        if token.is_expired() {
            self.renew(&token).await.map(Some)
        } else {
            Ok(Some(token))
        }
    }
}

#[async_trait]
impl TokenLifecycle for AuthenticationGateway {
    async fn is_authorized(&self) -> GatewayResult<bool> {
        Self::is_authorized(self).await
    }

    async fn refresh_token_if_required(&self) -> GatewayResult<RefreshOutcome> {
        Self::refresh_token_if_required(self).await
    }

    async fn authenticate_user(&self, code: &str) -> GatewayResult<AccessToken> {
        Self::authenticate_user(self, code).await
    }

    async fn reset_session(&self) -> GatewayResult<()> {
        Self::reset_session(self).await
    }
}
