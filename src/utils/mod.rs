// ABOUTME: Utility modules for common functionality across the gateway
// ABOUTME: Contains the shared HTTP client helpers used by the OAuth client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// HTTP client configuration and helpers
pub mod http_client;
