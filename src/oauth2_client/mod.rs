// ABOUTME: OAuth 2.0 client seam used by the gateway to talk to the fitness provider
// ABOUTME: Defines the OAuth2Client contract, its error type, and the reqwest-backed client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # OAuth 2.0 Client Module
//!
//! The gateway acts as an OAuth 2.0 client of the Jawbone UP API. It never
//! speaks the wire protocol itself: it goes through [`OAuth2Client`], which
//! builds the login URL, exchanges authorization codes and refreshes tokens.
//!
//! Implementations persist every token they obtain (exchange or refresh)
//! into their token store, so callers only ever read tokens back.

/// Reqwest-backed `OAuth2` client
pub mod client;

pub use client::{HttpOAuth2Client, OAuth2Config};

use crate::token_store::TokenStoreError;
use async_trait::async_trait;
use jawbone_core::AccessToken;
use thiserror::Error;

/// Errors raised by `OAuth2` client implementations
#[derive(Debug, Error)]
pub enum OAuthClientError {
    /// A configured endpoint is not a valid URL
    #[error("invalid OAuth endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The token endpoint could not be reached or returned an unreadable body
    #[error("token endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The token endpoint answered with a non-success status
    #[error("token endpoint rejected the request ({status}): {body}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Response body as returned by the provider
        body: String,
    },

    /// Refresh was requested for a token without a refresh token
    #[error("access token has no refresh token")]
    MissingRefreshToken,

    /// The obtained token could not be persisted
    #[error("failed to persist access token: {0}")]
    Storage(#[from] TokenStoreError),
}

/// OAuth 2.0 capabilities the gateway depends on
///
/// Network timeouts and cancellation belong to the implementation; the
/// gateway treats each call as one operation that yields a token or an error.
#[async_trait]
pub trait OAuth2Client: Send + Sync {
    /// Build the provider login URL the user has to visit
    ///
    /// # Errors
    ///
    /// Returns an error if the configured authorization endpoint is malformed
    fn authorization_uri(&self) -> Result<String, OAuthClientError>;

    /// Exchange an authorization code for a token and store it
    async fn exchange_code(&self, code: &str) -> Result<AccessToken, OAuthClientError>;

    /// Renew `token` and store the renewed token in its place
    async fn refresh(&self, token: &AccessToken) -> Result<AccessToken, OAuthClientError>;
}
