// ABOUTME: Main library entry point for the Jawbone UP authentication gateway
// ABOUTME: Token lifecycle management over pluggable OAuth 2.0 client and token store seams
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Jawbone UP Gateway
//!
//! Mediates OAuth 2.0 login and token lifecycle management against the
//! Jawbone UP fitness API. The gateway authorizes a user, exchanges an
//! authorization code for an access token, refreshes expired tokens and
//! clears stored credentials on logout.
//!
//! ## Architecture
//!
//! - **Gateway**: `AuthenticationGateway` decides and executes the lifecycle operations
//! - **`OAuth2` client**: `OAuth2Client` seam with a reqwest-backed implementation
//! - **Token store**: `TokenStore` seam with an in-memory implementation
//! - **Instrumentation**: `InstrumentedGateway` times operations without touching the core
//! - **Config**: Environment-only configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use jawbone_up_gateway::config::GatewayConfig;
//! use jawbone_up_gateway::gateway::AuthenticationGateway;
//! use jawbone_up_gateway::token_store::InMemoryTokenStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = GatewayConfig::from_env()?;
//!     let gateway = AuthenticationGateway::from_config(&config, Arc::new(InMemoryTokenStore::new()));
//!
//!     if !gateway.is_authorized().await? {
//!         let redirect = gateway.initiate_login()?;
//!         println!("Send the user to {}", redirect.location);
//!     }
//!
//!     Ok(())
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Token lifecycle manager, login initiation and timing decorator
pub mod gateway;

/// Production-ready logging configuration with structured output
pub mod logging;

/// `OAuth2` client seam and the HTTP implementation
pub mod oauth2_client;

/// Token storage seam and the in-memory backend
pub mod token_store;

/// Shared utilities
pub mod utils;

/// Classified error types shared with the core crate
pub use jawbone_core::errors;

/// Application constants shared with the core crate
pub use jawbone_core::constants;

/// Data models shared with the core crate
pub use jawbone_core::models;

pub use jawbone_core::{AccessToken, ErrorCode, ErrorKind, GatewayError, GatewayResult};
