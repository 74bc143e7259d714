// ABOUTME: Core types and constants for the Jawbone UP authentication gateway
// ABOUTME: Foundation crate with error codes, the access token model, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Jawbone Core
//!
//! Foundation crate providing shared types and constants for the Jawbone UP
//! authentication gateway. Kept free of HTTP and storage dependencies so the
//! gateway crate and any host application can share one vocabulary.
//!
//! ## Modules
//!
//! - **errors**: `GatewayError`, `ErrorCode` and the five error kinds callers branch on
//! - **constants**: Provider key, endpoints, scopes and timing values
//! - **models**: The `AccessToken` issued by the provider

/// Classified gateway errors with stable error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`AccessToken`)
pub mod models;

pub use errors::{ErrorCode, ErrorKind, GatewayError, GatewayResult};
pub use models::AccessToken;
