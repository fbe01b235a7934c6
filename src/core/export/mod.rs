//! Export orchestration
//!
//! This module provides the core export logic for Plantclip, including:
//! - Per-plant export task construction
//! - The exporter loop over a plant ID range
//! - Summary and progress reporting

pub mod exporter;
pub mod summary;
pub mod task;

pub use exporter::{ExportSettings, Exporter, PlantLookup};
pub use summary::{ExportSummary, PlantOutcome, SKIPPED_SENTINEL};
pub use task::{ExportOptions, ExportTask};
