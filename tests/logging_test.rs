// ABOUTME: Unit tests for logging functionality
// ABOUTME: Validates logging configuration from the environment and subscriber installation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use jawbone_up_gateway::constants::service_names;
use jawbone_up_gateway::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: &[&str] = &[
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "SERVICE_NAME",
    "LOG_INCLUDE_LOCATION",
    "LOG_INCLUDE_SPANS",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "test-gateway");

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "test-gateway");
    assert!(config.include_location); // production turns location on
    assert!(config.include_spans);

    clear_logging_env();
}

#[test]
#[serial]
fn test_logging_config_defaults_without_env() {
    clear_logging_env();

    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.service_name, service_names::JAWBONE_UP_GATEWAY);
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_second_init_is_an_error() {
    clear_logging_env();
    let config = LoggingConfig {
        format: LogFormat::Compact,
        ..LoggingConfig::default()
    };

    config.init().unwrap();

    assert!(config.init().is_err());
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default(" compact "), LogFormat::Compact);
    assert_eq!(LogFormat::from_str_or_default("fancy"), LogFormat::Pretty);
}

fn filter_directives(config: &LoggingConfig) -> Vec<String> {
    config
        .env_filter()
        .to_string()
        .split(',')
        .map(|directive| directive.trim().to_ascii_lowercase())
        .collect()
}

#[test]
fn test_directive_list_keeps_its_global_level() {
    let config = LoggingConfig {
        level: "warn,hyper=debug".into(),
        ..LoggingConfig::default()
    };

    let directives = filter_directives(&config);

    assert!(directives.iter().any(|d| d == "warn"), "{directives:?}");
    assert!(!directives.iter().any(|d| d == "info"), "{directives:?}");
    assert!(
        !directives.iter().any(|d| d.starts_with("jawbone_up_gateway=")),
        "{directives:?}"
    );
}

#[test]
fn test_bare_level_pins_gateway_crates() {
    let config = LoggingConfig {
        level: "debug".into(),
        ..LoggingConfig::default()
    };

    let directives = filter_directives(&config);

    assert!(directives.iter().any(|d| d == "jawbone_up_gateway=debug"), "{directives:?}");
    assert!(directives.iter().any(|d| d == "jawbone_core=debug"), "{directives:?}");
    assert!(directives.iter().any(|d| d == "reqwest=warn"), "{directives:?}");
}

#[test]
#[serial]
fn test_include_flags_parse_their_value() {
    clear_logging_env();
    env::set_var("LOG_INCLUDE_LOCATION", "false");
    env::set_var("LOG_INCLUDE_SPANS", "TRUE");

    let config = LoggingConfig::from_env();

    assert!(!config.include_location);
    assert!(config.include_spans);

    env::set_var("LOG_INCLUDE_LOCATION", "0");
    env::set_var("LOG_INCLUDE_SPANS", "off");

    let config = LoggingConfig::from_env();

    assert!(!config.include_location);
    assert!(!config.include_spans);
    clear_logging_env();
}
