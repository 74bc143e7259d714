// ABOUTME: In-memory token store backed by a concurrent map
// ABOUTME: Per-key atomic replacement so concurrent refreshes cannot interleave writes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{TokenStore, TokenStoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use jawbone_core::AccessToken;
use tracing::debug;

/// Token store that keeps tokens for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    tokens: DashMap<String, AccessToken>,
}

impl InMemoryTokenStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no token is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn has_token(&self, key: &str) -> Result<bool, TokenStoreError> {
        Ok(self.tokens.contains_key(key))
    }

    async fn retrieve_token(&self, key: &str) -> Result<AccessToken, TokenStoreError> {
        self.tokens
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| TokenStoreError::NotFound(key.to_owned()))
    }

    async fn save_token(&self, key: &str, token: &AccessToken) -> Result<(), TokenStoreError> {
        self.tokens.insert(key.to_owned(), token.clone());
        debug!(provider_key = key, "Stored access token");
        Ok(())
    }

    async fn clear(&self, key: &str) -> Result<(), TokenStoreError> {
        if self.tokens.remove(key).is_some() {
            debug!(provider_key = key, "Cleared access token");
        }
        Ok(())
    }
}
