// ABOUTME: Configuration management module for gateway settings
// ABOUTME: Loads provider credentials, endpoints and HTTP timeouts from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only: there is no config file to locate or parse.

/// Environment and gateway configuration
pub mod environment;

pub use environment::{GatewayConfig, HttpClientConfig};
