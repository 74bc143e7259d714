// ABOUTME: Classified error type for every gateway operation
// ABOUTME: Stable error codes, the five error kinds, and cause-preserving constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Gateway Error Handling
//!
//! Every failure a caller can observe is a [`GatewayError`]. Collaborator
//! errors (token store, OAuth client) never escape raw: they are attached as
//! the error `source` so diagnostics keep the full chain while callers branch
//! on [`GatewayError::kind`].

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Boxed cause attached to a gateway error
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error kinds callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The token store could not answer a query
    Storage,
    /// Token retrieval or the refresh call failed
    Refresh,
    /// Code exchange failed or the provider returned an invalid login URL
    Authentication,
    /// Clearing the stored token failed
    SessionReset,
    /// A guarded operation required an authorized session and none was found
    Verification,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Storage => "storage",
            Self::Refresh => "refresh",
            Self::Authentication => "authentication",
            Self::SessionReset => "session_reset",
            Self::Verification => "verification",
        };
        f.write_str(name)
    }
}

/// Standard error codes used by the gateway (201-206)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Provider returned an authorization URL that is not a valid URL
    #[serde(rename = "INVALID_LOGIN_URL")]
    InvalidLoginUrl = 201,
    /// Token retrieval or refresh failed
    #[serde(rename = "REFRESH_FAILED")]
    RefreshFailed = 202,
    /// Authorization code exchange failed
    #[serde(rename = "AUTHENTICATION_FAILED")]
    AuthenticationFailed = 203,
    /// Stored token could not be cleared
    #[serde(rename = "SESSION_RESET_FAILED")]
    SessionResetFailed = 204,
    /// No authorized session for a guarded operation
    #[serde(rename = "VERIFICATION_FAILED")]
    VerificationFailed = 205,
    /// Token store could not be queried
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 206,
}

impl ErrorCode {
    /// Numeric code as reported in logs and responses
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// The error kind this code belongs to
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::InvalidLoginUrl | Self::AuthenticationFailed => ErrorKind::Authentication,
            Self::RefreshFailed => ErrorKind::Refresh,
            Self::SessionResetFailed => ErrorKind::SessionReset,
            Self::VerificationFailed => ErrorKind::Verification,
            Self::StorageError => ErrorKind::Storage,
        }
    }

    /// Get the HTTP status code a web layer should answer with
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 401 Unauthorized: the user has to log in (again)
            Self::RefreshFailed | Self::VerificationFailed => 401,

            // 502 Bad Gateway: the provider misbehaved
            Self::InvalidLoginUrl | Self::AuthenticationFailed => 502,

            // 500 Internal Server Error: local storage trouble
            Self::SessionResetFailed | Self::StorageError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidLoginUrl => "The provider returned an unusable login URL",
            Self::RefreshFailed => "The access token could not be refreshed",
            Self::AuthenticationFailed => "The access token could not be requested",
            Self::SessionResetFailed => "The session could not be reset",
            Self::VerificationFailed => "No authorized session is available",
            Self::StorageError => "The token store could not be queried",
        }
    }
}

/// Unified error type for gateway operations
#[derive(Debug, Error)]
pub struct GatewayError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Underlying collaborator failure
    #[source]
    pub source: Option<BoxError>,
}

impl GatewayError {
    /// Create a new `GatewayError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the collaborator failure that caused this error
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The kind callers branch on
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Whether the caller should send the user through the login flow again
    #[must_use]
    pub const fn requires_reauthentication(&self) -> bool {
        matches!(
            self.code.kind(),
            ErrorKind::Refresh | ErrorKind::Verification
        )
    }
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Convenience constructors, one per classified failure
impl GatewayError {
    /// Token store could not answer `has_token`
    pub fn storage(source: impl Into<BoxError>) -> Self {
        Self::new(ErrorCode::StorageError, "could not find the access token").with_source(source)
    }

    /// Token retrieval or refresh failed
    pub fn refresh(source: impl Into<BoxError>) -> Self {
        Self::new(ErrorCode::RefreshFailed, "could not refresh the access token")
            .with_source(source)
    }

    /// Authorization code exchange failed
    pub fn authentication(source: impl Into<BoxError>) -> Self {
        Self::new(
            ErrorCode::AuthenticationFailed,
            "unable to request the access token",
        )
        .with_source(source)
    }

    /// Provider handed back an authorization URL that does not validate
    pub fn invalid_login_url(url: &str) -> Self {
        Self::new(
            ErrorCode::InvalidLoginUrl,
            format!("provider returned an invalid login URL ({url})"),
        )
    }

    /// The OAuth client could not build an authorization URL at all
    pub fn login_url_unavailable(source: impl Into<BoxError>) -> Self {
        Self::new(
            ErrorCode::InvalidLoginUrl,
            "provider login URL could not be built",
        )
        .with_source(source)
    }

    /// Clearing the stored token failed
    pub fn session_reset(source: impl Into<BoxError>) -> Self {
        Self::new(ErrorCode::SessionResetFailed, "could not clear the token").with_source(source)
    }

    /// No authorized session was found
    #[must_use]
    pub fn verification() -> Self {
        Self::new(ErrorCode::VerificationFailed, "token could not be verified")
    }
}

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Symbolic error code
    pub code: ErrorCode,
    /// Error kind
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
}

impl From<&GatewayError> for ErrorResponse {
    fn from(error: &GatewayError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                kind: error.kind(),
                message: error.message.clone(),
            },
        }
    }
}
