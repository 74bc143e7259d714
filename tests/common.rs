// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides scripted OAuth clients, failing token stores and token builders
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `jawbone_up_gateway`
//!
//! The scripted client behaves like the HTTP client (it stores every token it
//! hands out) without any network access.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jawbone_up_gateway::gateway::AuthenticationGateway;
use jawbone_up_gateway::oauth2_client::{OAuth2Client, OAuthClientError};
use jawbone_up_gateway::token_store::{InMemoryTokenStore, TokenStore, TokenStoreError};
use jawbone_up_gateway::AccessToken;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Provider key used throughout the tests
pub const PROVIDER_KEY: &str = "JawboneUP";

/// Token that expired one second ago
pub fn expired_token() -> AccessToken {
    AccessToken::new(PROVIDER_KEY, "stale-access-token")
        .with_expiry(Utc::now() - Duration::seconds(1))
        .with_refresh_token("refresh-token-1")
}

/// Token valid for another hour
pub fn valid_token() -> AccessToken {
    AccessToken::new(PROVIDER_KEY, "fresh-access-token")
        .with_expiry(Utc::now() + Duration::hours(1))
        .with_refresh_token("refresh-token-1")
}

/// OAuth client with scripted outcomes and call counters
pub struct ScriptedOAuthClient {
    storage: Arc<dyn TokenStore>,
    authorization_uri: String,
    fail_exchange: bool,
    fail_refresh: bool,
    exchange_calls: AtomicUsize,
    refresh_calls: AtomicUsize,
}

impl ScriptedOAuthClient {
    pub fn new(storage: Arc<dyn TokenStore>) -> Self {
        Self {
            storage,
            authorization_uri:
                "https://jawbone.com/auth/oauth2/auth?client_id=test&response_type=code".to_owned(),
            fail_exchange: false,
            fail_refresh: false,
            exchange_calls: AtomicUsize::new(0),
            refresh_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_exchange(mut self) -> Self {
        self.fail_exchange = true;
        self
    }

    pub fn failing_refresh(mut self) -> Self {
        self.fail_refresh = true;
        self
    }

    pub fn with_authorization_uri(mut self, uri: &str) -> Self {
        uri.clone_into(&mut self.authorization_uri);
        self
    }

    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_calls(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OAuth2Client for ScriptedOAuthClient {
    fn authorization_uri(&self) -> Result<String, OAuthClientError> {
        Ok(self.authorization_uri.clone())
    }

    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthClientError> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_exchange || code.is_empty() {
            return Err(OAuthClientError::Rejected {
                status: 400,
                body: r#"{"error":"invalid_grant"}"#.to_owned(),
            });
        }

        let token = AccessToken::new(PROVIDER_KEY, format!("access-for-{code}"))
            .with_expiry(Utc::now() + Duration::hours(1))
            .with_refresh_token("refresh-token-1")
            .with_scope("basic_read move_read");
        self.storage.save_token(PROVIDER_KEY, &token).await?;
        Ok(token)
    }

    async fn refresh(&self, token: &AccessToken) -> Result<AccessToken, OAuthClientError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_refresh {
            return Err(OAuthClientError::Rejected {
                status: 401,
                body: r#"{"error":"invalid_token"}"#.to_owned(),
            });
        }

        let renewed = AccessToken::new(PROVIDER_KEY, "renewed-access-token")
            .with_expiry(Utc::now() + Duration::hours(1))
            .with_refresh_token(
                token
                    .refresh_token
                    .clone()
                    .ok_or(OAuthClientError::MissingRefreshToken)?,
            );
        self.storage.save_token(PROVIDER_KEY, &renewed).await?;
        Ok(renewed)
    }
}

/// Token store whose every operation fails
pub struct UnavailableTokenStore;

#[async_trait]
impl TokenStore for UnavailableTokenStore {
    async fn has_token(&self, _key: &str) -> Result<bool, TokenStoreError> {
        Err(TokenStoreError::Unavailable("backend offline".to_owned()))
    }

    async fn retrieve_token(&self, _key: &str) -> Result<AccessToken, TokenStoreError> {
        Err(TokenStoreError::Unavailable("backend offline".to_owned()))
    }

    async fn save_token(&self, _key: &str, _token: &AccessToken) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::Unavailable("backend offline".to_owned()))
    }

    async fn clear(&self, _key: &str) -> Result<(), TokenStoreError> {
        Err(TokenStoreError::Unavailable("backend offline".to_owned()))
    }
}

/// Gateway over an in-memory store and a scripted client
pub struct TestGateway {
    pub gateway: AuthenticationGateway,
    pub storage: Arc<InMemoryTokenStore>,
    pub client: Arc<ScriptedOAuthClient>,
}

/// Build a gateway whose client is configured by `configure`
pub fn create_test_gateway(
    configure: impl FnOnce(ScriptedOAuthClient) -> ScriptedOAuthClient,
) -> TestGateway {
    let storage = Arc::new(InMemoryTokenStore::new());
    let client = Arc::new(configure(ScriptedOAuthClient::new(storage.clone())));
    let gateway = AuthenticationGateway::new(PROVIDER_KEY, client.clone(), storage.clone());

    TestGateway {
        gateway,
        storage,
        client,
    }
}

/// Build a gateway with the default scripted client, seeded with `token`
pub async fn create_gateway_with_token(token: &AccessToken) -> TestGateway {
    let test = create_test_gateway(|client| client);
    test.storage
        .save_token(PROVIDER_KEY, token)
        .await
        .expect("seed token");
    test
}
