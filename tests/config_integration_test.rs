//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX`.

use plantclip::config::load_config;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("PLANTCLIP_APPLICATION_LOG_LEVEL");
    std::env::remove_var("PLANTCLIP_APPLICATION_DRY_RUN");
    std::env::remove_var("PLANTCLIP_EARTHENGINE_PROJECT");
    std::env::remove_var("PLANTCLIP_EARTHENGINE_ACCESS_TOKEN");
    std::env::remove_var("PLANTCLIP_EXPORT_ID_START");
    std::env::remove_var("PLANTCLIP_EXPORT_ID_END");
    std::env::remove_var("PLANTCLIP_EXPORT_SOURCES");
    std::env::remove_var("TEST_EE_ACCESS_TOKEN");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[earthengine]
base_url = "https://earthengine.googleapis.com"
project = "plants-project"
access_token = "ya29.test"
timeout_seconds = 30

[plants]
path = "plants.csv"
sheet_index = 1
id_column = 2
latitude_column = 7
longitude_column = 8

[export]
id_start = 1
id_end = 10
sources = ["ls8"]
half_span_degrees = 0.01
max_pixels = 50000000
skip_empty_tiles = false
folder_prefix = "Plants_"

[logging]
local_enabled = false
local_path = "/tmp/plantclip"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.earthengine.project, "plants-project");
    assert_eq!(config.earthengine.timeout_seconds, 30);
    let token = config.earthengine.access_token.unwrap();
    let raw: &str = token.expose_secret().as_ref();
    assert_eq!(raw, "ya29.test");
    assert_eq!(config.plants.path, "plants.csv");
    assert_eq!(config.plants.sheet_index, 1);
    assert_eq!(config.plants.latitude_column, 7);
    assert_eq!(config.export.id_start, 1);
    assert_eq!(config.export.id_end, 10);
    assert_eq!(config.export.sources, vec!["ls8"]);
    assert_eq!(config.export.half_span_degrees, 0.01);
    assert_eq!(config.export.max_pixels, 50_000_000);
    assert!(!config.export.skip_empty_tiles);
    assert_eq!(config.export.folder_prefix, "Plants_");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[earthengine]\nproject = \"demo\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(config.earthengine.access_token.is_none());
    assert_eq!(config.plants.path, "egrid2014_data_v2_PLNT14.xlsx");
    assert_eq!(config.plants.id_column, 0);
    assert_eq!(config.plants.latitude_column, 4);
    assert_eq!(config.plants.longitude_column, 5);
    assert_eq!(config.export.id_start, 300);
    assert_eq!(config.export.id_end, 500);
    assert_eq!(config.export.sources, vec!["naip", "ls8"]);
    assert_eq!(config.export.half_span_degrees, 0.005);
    assert_eq!(config.export.max_pixels, 1_000_000_000);
    assert!(config.export.skip_empty_tiles);
    assert_eq!(config.export.folder_prefix, "PowerPlants_");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_EE_ACCESS_TOKEN", "ya29.from-env");

    let file = write_config(
        r#"
[earthengine]
project = "demo"
access_token = "${TEST_EE_ACCESS_TOKEN}"
"#,
    );
    let config = load_config(file.path()).unwrap();
    let token = config.earthengine.access_token.unwrap();
    let raw: &str = token.expose_secret().as_ref();
    assert_eq!(raw, "ya29.from-env");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[earthengine]
project = "demo"
access_token = "${TEST_EE_ACCESS_TOKEN}"
"#,
    );
    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_EE_ACCESS_TOKEN"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PLANTCLIP_EARTHENGINE_PROJECT", "override-project");
    std::env::set_var("PLANTCLIP_EXPORT_ID_START", "10");
    std::env::set_var("PLANTCLIP_EXPORT_ID_END", "20");
    std::env::set_var("PLANTCLIP_EXPORT_SOURCES", "ls8,naip");
    std::env::set_var("PLANTCLIP_APPLICATION_DRY_RUN", "true");

    let file = write_config("[earthengine]\nproject = \"demo\"\n");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.earthengine.project, "override-project");
    assert_eq!(config.export.id_start, 10);
    assert_eq!(config.export.id_end, 20);
    assert_eq!(config.export.sources, vec!["ls8", "naip"]);
    assert!(config.application.dry_run);

    cleanup_env_vars();
}

#[test]
fn test_unknown_source_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[earthengine]
project = "demo"

[export]
sources = ["naip", "modis"]
"#,
    );
    let err = load_config(file.path()).unwrap_err().to_string();
    assert!(err.contains("Cannot find modis collections"));
}

#[test]
fn test_reversed_range_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[earthengine]
project = "demo"

[export]
id_start = 500
id_end = 300
"#,
    );
    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_missing_project_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("[earthengine]\nproject = \"\"\n");
    let err = load_config(file.path()).unwrap_err().to_string();
    assert!(err.contains("earthengine.project"));
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/plantclip.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
