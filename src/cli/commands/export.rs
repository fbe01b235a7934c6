//! Export command implementation
//!
//! This module implements the `export` command, which starts one Earth Engine
//! export task per plant for every selected imagery source.

use crate::adapters::earthengine::{DryRunService, EarthEngineClient, ImageryService};
use crate::adapters::spreadsheet::PlantTable;
use crate::config::{read_config, PlantClipConfig};
use crate::core::export::{ExportSettings, ExportSummary, Exporter};
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// First plant ID (inclusive); overrides export.id_start
    #[arg(long)]
    pub start: Option<u32>,

    /// Last plant ID (exclusive); overrides export.id_end
    #[arg(long)]
    pub end: Option<u32>,

    /// Imagery source (naip or ls8); repeat for several, in order
    #[arg(long, value_name = "SOURCE")]
    pub source: Vec<String>,

    /// Dry run mode - build and log requests without submitting them
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Applies command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut PlantClipConfig) {
        if let Some(start) = self.start {
            tracing::info!(start, "Overriding export.id_start from CLI");
            config.export.id_start = start;
        }

        if let Some(end) = self.end {
            tracing::info!(end, "Overriding export.id_end from CLI");
            config.export.id_end = end;
        }

        if !self.source.is_empty() {
            tracing::info!(sources = ?self.source, "Overriding export.sources from CLI");
            config.export.sources = self.source.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }

    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Validated below, once the CLI overrides are in place
        let mut config = match read_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        // Checked by validate() above
        let range = match config.export.id_range() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Invalid plant ID range: {e}");
                return Ok(2);
            }
        };
        let sources = match config.export.image_sources() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let table = match PlantTable::open(&config.plants) {
            Ok(t) => Arc::new(t),
            Err(e) => {
                tracing::error!(error = %e, path = %config.plants.path, "Failed to load plant table");
                eprintln!("Failed to load plant table {}: {e}", config.plants.path);
                return Ok(2);
            }
        };

        let service: Arc<dyn ImageryService> = if config.application.dry_run {
            tracing::info!("Dry run mode enabled - no export tasks will be submitted");
            eprintln!("🔍 DRY RUN MODE - No export tasks will be submitted");
            Arc::new(DryRunService::new(config.earthengine.project.clone()))
        } else {
            match EarthEngineClient::initialize(config.earthengine.clone()) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to initialize Earth Engine client");
                    eprintln!("Failed to initialize Earth Engine client: {e}");
                    return Ok(4); // Connection error exit code
                }
            }
        };

        let exporter = Exporter::new(
            table,
            service,
            ExportSettings::from_config(&config.export),
        )
        .with_shutdown_signal(shutdown_signal);

        let summaries = match exporter.run_all(range, &sources).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        print_summaries(&summaries);

        Ok(exit_code(&summaries))
    }
}

fn print_summaries(summaries: &[ExportSummary]) {
    println!();
    println!("📊 Export Summary:");
    for summary in summaries {
        println!(
            "  {}: {} submitted, {} skipped of {} requested ({:.1}%, {:.2}s){}",
            summary.source,
            summary.submitted,
            summary.skipped,
            summary.requested,
            summary.submission_rate(),
            summary.duration.as_secs_f64(),
            if summary.dry_run { " [dry run]" } else { "" }
        );
    }
    println!();
}

/// Maps export summaries to the process exit code
pub fn exit_code(summaries: &[ExportSummary]) -> i32 {
    if summaries.iter().any(|s| s.interrupted) {
        tracing::info!("Export interrupted by user signal");
        eprintln!("⚠️  Export interrupted. Tasks already started keep running.");
        130 // SIGINT exit code (standard Unix convention)
    } else if summaries.iter().all(ExportSummary::is_successful) {
        0
    } else {
        1 // Some plants skipped
    }
}
