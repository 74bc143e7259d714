// ABOUTME: Token storage seam keyed by provider key
// ABOUTME: Defines the TokenStore contract and its error type, plus the in-memory backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Token Store
//!
//! The gateway owns no state of its own: every access token lives in a
//! [`TokenStore`], keyed by the provider key of the integration it belongs to.
//!
//! ## Contract
//!
//! - `retrieve_token` returns a complete token or fails; there are no partial tokens.
//! - `save_token` replaces any previous token for the key in one step.
//! - `clear` on a key without a token succeeds.
//! - Concurrent refreshes of the same key must not corrupt the stored token.
//!   The gateway takes no locks, so a store shared across tasks has to make
//!   each per-key read and write atomic.

mod memory;

pub use memory::InMemoryTokenStore;

use async_trait::async_trait;
use jawbone_core::AccessToken;
use thiserror::Error;

/// Errors reported by token store backends
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// No token is stored under the key
    #[error("no access token stored for provider key {0}")]
    NotFound(String),

    /// The backend could not be reached or refused the operation
    #[error("token store unavailable: {0}")]
    Unavailable(String),
}

/// Storage backend for provider access tokens
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Whether a token is stored under `key`
    async fn has_token(&self, key: &str) -> Result<bool, TokenStoreError>;

    /// Fetch the token stored under `key`
    ///
    /// Fails with [`TokenStoreError::NotFound`] when nothing is stored.
    async fn retrieve_token(&self, key: &str) -> Result<AccessToken, TokenStoreError>;

    /// Store `token` under `key`, replacing any previous token
    async fn save_token(&self, key: &str, token: &AccessToken) -> Result<(), TokenStoreError>;

    /// Remove the token stored under `key`; a missing token is not an error
    async fn clear(&self, key: &str) -> Result<(), TokenStoreError>;
}
