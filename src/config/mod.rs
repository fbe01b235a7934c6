//! Configuration management for Plantclip.
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Plantclip uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PLANTCLIP_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run flag
//! - [`EarthEngineConfig`] - Earth Engine endpoint, project and access token
//! - [`PlantsConfig`] - Plant spreadsheet path and column layout
//! - [`ExportConfig`] - Identifier range, sources and export options
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [earthengine]
//! project = "ee-power-plants"
//! access_token = "${EE_ACCESS_TOKEN}"
//!
//! [plants]
//! path = "egrid2014_data_v2_PLNT14.xlsx"
//!
//! [export]
//! id_start = 300
//! id_end = 500
//! sources = ["naip", "ls8"]
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use plantclip::config::load_config;
//!
//! # fn example() {
//! match load_config("plantclip.toml") {
//!     Ok(config) => println!("Project: {}", config.earthengine.project),
//!     Err(e) => eprintln!("Configuration error: {}", e),
//! }
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, read_config};
pub use schema::{
    ApplicationConfig, EarthEngineConfig, ExportConfig, LoggingConfig, PlantClipConfig,
    PlantsConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
