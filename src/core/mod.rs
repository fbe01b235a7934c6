//! Core business logic for Plantclip.
//!
//! # Modules
//!
//! - [`mosaic`] - Per-source mosaics (NAIP mosaic, pan-sharpened Landsat 8 median)
//! - [`export`] - Export task construction and the per-plant export loop
//!
//! # Export Workflow
//!
//! 1. **Load Plants**: Index the plant sheet by ID
//! 2. **Build Mosaic**: Compose the source image once per run
//! 3. **Clip**: Cut a square around each plant's coordinates
//! 4. **Submit**: Start one export task per plant, without waiting for it
//! 5. **Report**: Print `<id>:<source>` or `-1` per ID, then a summary
//!
//! # Example
//!
//! ```rust,no_run
//! use plantclip::adapters::earthengine::DryRunService;
//! use plantclip::adapters::spreadsheet::PlantTable;
//! use plantclip::config::load_config;
//! use plantclip::core::export::{ExportSettings, Exporter};
//! use plantclip::domain::ImageSource;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("plantclip.toml")?;
//! let table = PlantTable::open(&config.plants)?;
//!
//! let exporter = Exporter::new(
//!     Arc::new(table),
//!     Arc::new(DryRunService::new("my-project")),
//!     ExportSettings::from_config(&config.export),
//! );
//!
//! let summary = exporter
//!     .run(config.export.id_range()?, ImageSource::Naip)
//!     .await?;
//!
//! println!("Submitted: {}", summary.submitted);
//! println!("Skipped: {}", summary.skipped);
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod mosaic;
