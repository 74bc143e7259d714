// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Provider identifiers, Jawbone UP endpoints, scopes and timing values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Provider identifiers used as token store keys
pub mod providers {
    /// Storage key of the Jawbone UP integration
    pub const JAWBONE_UP: &str = "JawboneUP";
    /// Human-readable provider name used in log lines
    pub const JAWBONE_UP_DISPLAY_NAME: &str = "Jawbone UP API";
}

/// Jawbone UP OAuth 2.0 endpoints and defaults
pub mod jawbone {
    /// Authorization endpoint the user is redirected to
    pub const AUTH_URL: &str = "https://jawbone.com/auth/oauth2/auth";
    /// Token endpoint for code exchange and refresh
    pub const TOKEN_URL: &str = "https://jawbone.com/auth/oauth2/token";
    /// Scopes requested when none are configured
    pub const DEFAULT_SCOPES: &[&str] = &[
        "basic_read",
        "extended_read",
        "move_read",
        "sleep_read",
        "meal_read",
    ];
}

/// OAuth 2.0 grant and parameter names
pub mod oauth {
    /// Grant type for authorization code exchange
    pub const GRANT_AUTHORIZATION_CODE: &str = "authorization_code";
    /// Grant type for token refresh
    pub const GRANT_REFRESH_TOKEN: &str = "refresh_token";
    /// Response type requested on the authorization endpoint
    pub const RESPONSE_TYPE_CODE: &str = "code";
    /// Token type assumed when the provider omits one
    pub const DEFAULT_TOKEN_TYPE: &str = "Bearer";
}

/// Time-related constants
pub mod time {
    /// Token lifetime assumed when `expires_in` overflows (1 hour)
    pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 3600;
    /// Window in which a token counts as expiring soon (5 minutes)
    pub const EXPIRY_WARNING_SECONDS: i64 = 300;
}

/// HTTP client timeouts
pub mod network {
    /// Request timeout for token endpoint calls
    pub const OAUTH_REQUEST_TIMEOUT_SECS: u64 = 15;
    /// Connect timeout for token endpoint calls
    pub const OAUTH_CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported in log records
    pub const JAWBONE_UP_GATEWAY: &str = "jawbone-up-gateway";
}
