//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use trackpaint::config::AppConfig;
use trackpaint_core::BlockedSegmentsType;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("TP_TABLE__DEFAULT_VARIANT", "wideTrain");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("TP_TABLE__DEFAULT_VARIANT");
    assert_eq!(config.table.default_variant, BlockedSegmentsType::WideTrain);
}

#[test]
#[serial]
fn test_env_override_log_level() {
    std::env::set_var("TP_DEBUG__LOG_LEVEL", "trace");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("TP_DEBUG__LOG_LEVEL");
    assert_eq!(config.debug.log_level, "trace");
}

#[test]
#[serial]
fn test_invalid_env_value_is_error() {
    std::env::set_var("TP_TABLE__DEFAULT_VARIANT", "monorail");
    let result = AppConfig::load();
    std::env::remove_var("TP_TABLE__DEFAULT_VARIANT");
    let err = result.unwrap_err();
    assert!(format!("{}", err).contains("Configuration error"));
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("TP_TABLE__DEFAULT_VARIANT");

    let cwd = std::env::current_dir().unwrap();
    println!("Current dir: {:?}", cwd);
    println!(
        "config/default.toml exists: {}",
        cwd.join("config/default.toml").exists()
    );

    let config = AppConfig::load().unwrap();
    println!("Default variant from file: {}", config.table.default_variant);
    assert!(config.table.export_path.ends_with(".ron"));
}
