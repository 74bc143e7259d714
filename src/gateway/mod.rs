// ABOUTME: Token lifecycle gateway: authorization checks, refresh, code exchange and logout
// ABOUTME: Declares the lifecycle trait and the result types shared by the manager and decorators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Authentication Gateway
//!
//! Session states for one provider key:
//!
//! ```text
//!   [NoToken] --authenticate_user ok--> [Valid]
//!   [Valid]   --refresh_token_if_required, refresh ok--> [Valid]
//!   [Valid]   --refresh_token_if_required, refresh fails--> [Invalid]
//!   [Valid] | [Invalid] --reset_session--> [NoToken]
//! ```
//!
//! `[Invalid]` is only observable as a `Refresh` error; the caller has to send
//! the user through the login flow again.

/// Timing decorator for lifecycle operations
pub mod instrumentation;
/// Login URL validation
pub mod login;
/// The token lifecycle manager
pub mod manager;

pub use instrumentation::{
    InMemoryTimings, InstrumentedGateway, TimingEvent, TimingSink, DEFAULT_TIMING_CAPACITY,
};
pub use login::LoginRedirect;
pub use manager::AuthenticationGateway;

use async_trait::async_trait;
use jawbone_core::{AccessToken, GatewayError, GatewayResult};

/// Outcome of a successful `refresh_token_if_required` call
///
/// A failed refresh is the `Err` arm of the surrounding `GatewayResult`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The stored token had not expired; nothing was sent to the provider
    NotNeeded,
    /// The token was expired and has been renewed
    Refreshed,
}

impl RefreshOutcome {
    /// Whether the provider was asked for a new token
    #[must_use]
    pub const fn was_refreshed(self) -> bool {
        matches!(self, Self::Refreshed)
    }
}

/// Consolidated answer to "is this user currently authenticated"
#[derive(Debug)]
pub enum AuthorizationResult {
    /// A usable token is stored (refreshed first if it had expired)
    Authorized(AccessToken),
    /// No token is stored for the provider key
    Unauthorized,
    /// The answer could not be determined; the error carries kind and cause
    Error(GatewayError),
}

impl AuthorizationResult {
    /// Whether the user holds a usable token
    #[must_use]
    pub const fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized(_))
    }

    /// The token, if authorized
    #[must_use]
    pub const fn token(&self) -> Option<&AccessToken> {
        match self {
            Self::Authorized(token) => Some(token),
            Self::Unauthorized | Self::Error(_) => None,
        }
    }
}

/// The public token lifecycle operations
///
/// Implemented by [`AuthenticationGateway`] and by decorators wrapping it.
#[async_trait]
pub trait TokenLifecycle: Send + Sync {
    /// Whether a token is stored for the provider key
    async fn is_authorized(&self) -> GatewayResult<bool>;

    /// Refresh the stored token if it has expired
    async fn refresh_token_if_required(&self) -> GatewayResult<RefreshOutcome>;

    /// Exchange an authorization code for an access token
    async fn authenticate_user(&self, code: &str) -> GatewayResult<AccessToken>;

    /// Clear the stored token
    async fn reset_session(&self) -> GatewayResult<()>;

    /// Guard for flows that need an authorized session
    ///
    /// # Errors
    ///
    /// Returns a `Verification` error when no token is stored, or the
    /// `Storage` error from [`TokenLifecycle::is_authorized`]
    async fn verify_token(&self) -> GatewayResult<bool> {
        if self.is_authorized().await? {
            Ok(true)
        } else {
            Err(GatewayError::verification())
        }
    }
}
