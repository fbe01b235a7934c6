//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "plantclip.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Plantclip configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Set earthengine.project in {}", self.output);
                println!("  2. Put EE_ACCESS_TOKEN in a .env file");
                println!("     (for example: gcloud auth print-access-token)");
                println!("  3. Point plants.path at the eGRID plant sheet");
                println!("  4. Validate configuration: plantclip validate-config");
                println!("  5. Preview requests: plantclip export --dry-run");
                println!("  6. Run export: plantclip export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Sample configuration with every option at its default
    pub fn generate_config() -> String {
        r#"# Plantclip Configuration File
# Exports satellite tiles around power plants via Earth Engine

[application]
log_level = "info"   # trace | debug | info | warn | error
dry_run = false      # build requests without submitting them

[earthengine]
base_url = "https://earthengine.googleapis.com"
project = "my-cloud-project"
# OAuth2 bearer token; leave unset for dry runs
access_token = "${EE_ACCESS_TOKEN}"
timeout_seconds = 60

[plants]
# eGRID plant sheet (.xlsx, .xls, .xlsb, .ods) or a CSV export of it
path = "egrid2014_data_v2_PLNT14.xlsx"
sheet_index = 0
# Zero-based column offsets
id_column = 0
latitude_column = 4
longitude_column = 5

[export]
# Plant IDs in [id_start, id_end)
id_start = 300
id_end = 500
sources = ["naip", "ls8"]
# Half the side of the clip square, in degrees
half_span_degrees = 0.005
max_pixels = 1000000000
skip_empty_tiles = true
# Output folder is <folder_prefix><source>, e.g. PowerPlants_naip
folder_prefix = "PowerPlants_"

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"   # daily | hourly | never
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlantClipConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_parses() {
        let content = InitArgs::generate_config().replace("${EE_ACCESS_TOKEN}", "token");
        let config: PlantClipConfig = toml::from_str(&content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.export.id_start, 300);
        assert_eq!(config.export.sources, vec!["naip", "ls8"]);
        assert_eq!(config.plants.longitude_column, 5);
    }

    #[tokio::test]
    async fn test_init_writes_file_and_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("plantclip.toml");
        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        assert_eq!(args.execute().await.unwrap(), 0);
        assert!(output.exists());
        assert_eq!(args.execute().await.unwrap(), 2);

        let forced = InitArgs {
            force: true,
            ..args
        };
        assert_eq!(forced.execute().await.unwrap(), 0);
    }
}
