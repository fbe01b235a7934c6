//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Plantclip configuration file.

use crate::config::load_config;
use clap::Args;
use secrecy::ExposeSecret;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config already validates; a failure here covers both cases
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let token = match &config.earthengine.access_token {
            Some(t) if !t.expose_secret().is_blank() => "set",
            _ => "not set (dry run only)",
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Earth Engine API: {}", config.earthengine.base_url);
        println!("  Earth Engine Project: {}", config.earthengine.project);
        println!("  Access Token: {token}");
        println!("  Plant Table: {}", config.plants.path);
        println!(
            "  Columns (id, lat, lon): {}, {}, {}",
            config.plants.id_column, config.plants.latitude_column, config.plants.longitude_column
        );
        println!(
            "  Plant IDs: [{}, {})",
            config.export.id_start, config.export.id_end
        );
        println!("  Sources: {:?}", config.export.sources);
        println!("  Half Span: {}°", config.export.half_span_degrees);
        println!("  Max Pixels: {}", config.export.max_pixels);
        println!("  Folder Prefix: {}", config.export.folder_prefix);
        println!();
        Ok(0)
    }
}
