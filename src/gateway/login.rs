// ABOUTME: Login initiation: validates the provider authorization URL before redirecting
// ABOUTME: The web layer performs the actual redirect using the validated location
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use jawbone_core::{GatewayError, GatewayResult};
use std::fmt;
use url::Url;

/// HTTP status a web layer should answer with when redirecting to the provider
pub const REDIRECT_STATUS: u16 = 302;

/// A validated provider login URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    /// Absolute http(s) URL of the provider login page
    pub location: Url,
}

impl LoginRedirect {
    /// Validate an authorization URL handed back by the OAuth client
    ///
    /// # Errors
    ///
    /// Returns an `InvalidLoginUrl` error unless `uri` is an absolute http or
    /// https URL with a host
    pub fn from_authorization_uri(uri: &str) -> GatewayResult<Self> {
        let location =
            Url::parse(uri).map_err(|e| GatewayError::invalid_login_url(uri).with_source(e))?;

        let has_host = location.host_str().is_some_and(|host| !host.is_empty());
        if !matches!(location.scheme(), "http" | "https") || !has_host {
            return Err(GatewayError::invalid_login_url(uri));
        }

        Ok(Self { location })
    }

    /// The redirect target as a string, ready for a `Location` header
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.location.as_str()
    }
}

impl fmt::Display for LoginRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.location.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jawbone_core::ErrorCode;

    #[test]
    fn test_accepts_provider_login_url() {
        let redirect = LoginRedirect::from_authorization_uri(
            "https://jawbone.com/auth/oauth2/auth?client_id=abc&response_type=code",
        )
        .unwrap();

        assert_eq!(redirect.location.host_str(), Some("jawbone.com"));
    }

    #[test]
    fn test_rejects_relative_and_non_http_urls() {
        for uri in [
            "/auth/oauth2/auth",
            "",
            "mailto:someone@jawbone.com",
            "file:///etc/passwd",
            "ftp://jawbone.com/auth",
        ] {
            let error = LoginRedirect::from_authorization_uri(uri).unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidLoginUrl, "accepted {uri:?}");
        }
    }
}
