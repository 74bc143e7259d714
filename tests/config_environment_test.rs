// ABOUTME: Unit tests for environment-based gateway configuration
// ABOUTME: Validates required variables, defaults, scope parsing and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use jawbone_up_gateway::config::{GatewayConfig, HttpClientConfig};
use jawbone_up_gateway::constants::{jawbone, providers};
use serial_test::serial;
use std::env;

const ALL_VARS: &[&str] = &[
    "JAWBONE_CLIENT_ID",
    "JAWBONE_CLIENT_SECRET",
    "JAWBONE_REDIRECT_URI",
    "JAWBONE_AUTH_URL",
    "JAWBONE_TOKEN_URL",
    "JAWBONE_SCOPES",
    "JAWBONE_PROVIDER_KEY",
    "JAWBONE_HTTP_TIMEOUT_SECS",
    "JAWBONE_HTTP_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

fn set_required_env() {
    clear_env();
    env::set_var("JAWBONE_CLIENT_ID", "client-123");
    env::set_var("JAWBONE_CLIENT_SECRET", "secret-456");
    env::set_var("JAWBONE_REDIRECT_URI", "http://localhost:8080/oauth/callback");
}

#[test]
#[serial]
fn test_from_env_applies_defaults() {
    set_required_env();

    let config = GatewayConfig::from_env().unwrap();

    assert_eq!(config.provider_key, providers::JAWBONE_UP);
    assert_eq!(config.oauth.client_id, "client-123");
    assert_eq!(config.oauth.auth_url, jawbone::AUTH_URL);
    assert_eq!(config.oauth.token_url, jawbone::TOKEN_URL);
    assert_eq!(config.oauth.scopes.len(), jawbone::DEFAULT_SCOPES.len());
    assert_eq!(config.http, HttpClientConfig::default());

    clear_env();
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    set_required_env();
    env::set_var("JAWBONE_PROVIDER_KEY", "JawboneUP-staging");
    env::set_var("JAWBONE_TOKEN_URL", "https://staging.jawbone.test/token");
    env::set_var("JAWBONE_SCOPES", "basic_read,sleep_read");
    env::set_var("JAWBONE_HTTP_TIMEOUT_SECS", "30");
    env::set_var("JAWBONE_HTTP_CONNECT_TIMEOUT_SECS", "2");

    let config = GatewayConfig::from_env().unwrap();

    assert_eq!(config.provider_key, "JawboneUP-staging");
    assert_eq!(config.oauth.token_url, "https://staging.jawbone.test/token");
    assert_eq!(config.oauth.scopes, vec!["basic_read", "sleep_read"]);
    assert_eq!(config.http.timeout_secs, 30);
    assert_eq!(config.http.connect_timeout_secs, 2);

    clear_env();
}

#[test]
#[serial]
fn test_from_env_requires_client_secret() {
    set_required_env();
    env::remove_var("JAWBONE_CLIENT_SECRET");

    let error = GatewayConfig::from_env().unwrap_err();

    assert!(error.to_string().contains("JAWBONE_CLIENT_SECRET"));
    clear_env();
}

#[test]
#[serial]
fn test_from_env_rejects_non_numeric_timeout() {
    set_required_env();
    env::set_var("JAWBONE_HTTP_TIMEOUT_SECS", "soon");

    let error = GatewayConfig::from_env().unwrap_err();

    assert!(error.to_string().contains("JAWBONE_HTTP_TIMEOUT_SECS"));
    clear_env();
}

#[test]
#[serial]
fn test_validate_rejects_bad_redirect_uri() {
    set_required_env();
    let mut config = GatewayConfig::from_env().unwrap();
    clear_env();

    config.oauth.redirect_uri = "callback".to_owned();
    assert!(config.validate().is_err());
}

#[test]
#[serial]
fn test_validate_rejects_empty_provider_key_and_zero_timeout() {
    set_required_env();
    let config = GatewayConfig::from_env().unwrap();
    clear_env();

    let mut blank_key = config.clone();
    blank_key.provider_key = "  ".to_owned();
    assert!(blank_key.validate().is_err());

    let mut zero_timeout = config;
    zero_timeout.http.timeout_secs = 0;
    assert!(zero_timeout.validate().is_err());
}

#[test]
#[serial]
fn test_summary_omits_secret() {
    set_required_env();
    let config = GatewayConfig::from_env().unwrap();
    clear_env();

    let summary = config.summary();

    assert!(summary.contains(providers::JAWBONE_UP));
    assert!(!summary.contains("secret-456"));
}
