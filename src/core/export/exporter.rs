//! Plant exporter - submits one clipped export task per plant identifier
//!
//! For every identifier in the requested range the exporter resolves the
//! plant's coordinates, clips the source mosaic to a square around it and
//! starts an export task. Identifiers that cannot be resolved are reported
//! with the `-1` sentinel and skipped.

use crate::adapters::earthengine::expression::Geometry;
use crate::adapters::earthengine::ImageryService;
use crate::adapters::spreadsheet::PlantTable;
use crate::config::ExportConfig;
use crate::core::export::summary::{ExportSummary, PlantOutcome};
use crate::core::export::task::{ExportOptions, ExportTask};
use crate::core::mosaic::build_mosaic;
use crate::domain::{
    ImageSource, LookupError, PlantClipError, PlantId, PlantIdRange, PlantRecord, Result,
};
use crate::{log_error_with_context, log_export_submitted, log_plant_skipped};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// Resolves plant identifiers to coordinates
pub trait PlantLookup: Send + Sync {
    /// Looks up one plant
    fn lookup(&self, id: PlantId) -> std::result::Result<PlantRecord, LookupError>;
}

impl PlantLookup for PlantTable {
    fn lookup(&self, id: PlantId) -> std::result::Result<PlantRecord, LookupError> {
        PlantTable::lookup(self, id)
    }
}

/// Export parameters that do not depend on the plant
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    /// Half the side of the clip square, in degrees
    pub half_span_degrees: f64,

    /// Pixel budget per task
    pub max_pixels: u64,

    /// Skip tiles with no unmasked pixels
    pub skip_empty_tiles: bool,

    /// Folder prefix; the source name is appended
    pub folder_prefix: String,
}

impl ExportSettings {
    /// Builds settings from the `[export]` section
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            half_span_degrees: config.half_span_degrees,
            max_pixels: config.max_pixels,
            skip_empty_tiles: config.skip_empty_tiles,
            folder_prefix: config.folder_prefix.clone(),
        }
    }

    /// Checks the values `run` relies on
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-finite or non-positive span.
    pub fn validate(&self) -> Result<()> {
        if !(self.half_span_degrees.is_finite() && self.half_span_degrees > 0.0) {
            return Err(PlantClipError::Validation(format!(
                "half_span_degrees must be a positive number, got {}",
                self.half_span_degrees
            )));
        }
        Ok(())
    }

    fn options_for(&self, source: ImageSource) -> ExportOptions {
        ExportOptions {
            scale: source.scale(),
            skip_empty_tiles: self.skip_empty_tiles,
            max_pixels: self.max_pixels,
            folder: source.folder(&self.folder_prefix),
        }
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

/// Batch exporter for one plant table and one imagery service
pub struct Exporter {
    plants: Arc<dyn PlantLookup>,
    service: Arc<dyn ImageryService>,
    settings: ExportSettings,
    shutdown_signal: Option<watch::Receiver<bool>>,
}

impl Exporter {
    /// Create a new exporter
    pub fn new(
        plants: Arc<dyn PlantLookup>,
        service: Arc<dyn ImageryService>,
        settings: ExportSettings,
    ) -> Self {
        Self {
            plants,
            service,
            settings,
            shutdown_signal: None,
        }
    }

    /// Stop between identifiers once `signal` turns true
    pub fn with_shutdown_signal(mut self, signal: watch::Receiver<bool>) -> Self {
        self.shutdown_signal = Some(signal);
        self
    }

    fn shutdown_requested(&self) -> bool {
        self.shutdown_signal
            .as_ref()
            .map(|rx| *rx.borrow())
            .unwrap_or(false)
    }

    /// Starts one export task per plant in `range` for `source`
    ///
    /// Prints `<id>:<source>` to stdout for every task started and `-1` for
    /// every identifier skipped. Tasks are not awaited.
    ///
    /// # Errors
    ///
    /// Fails before any lookup when the settings are invalid. Otherwise returns
    /// the first service error; tasks already started stay started.
    pub async fn run(&self, range: PlantIdRange, source: ImageSource) -> Result<ExportSummary> {
        self.settings.validate()?;

        let start_time = Instant::now();
        let mut summary = ExportSummary::new(source);
        summary.dry_run = self.service.is_dry_run();

        tracing::info!(
            range = %range,
            source = %source,
            project = %self.service.project(),
            dry_run = summary.dry_run,
            "Starting export run"
        );

        let mosaic = build_mosaic(source);
        let options = self.settings.options_for(source);
        let half_span = self.settings.half_span_degrees;

        for id in range.iter() {
            if self.shutdown_requested() {
                tracing::warn!(
                    plant_id = %id,
                    "Shutdown requested, stopping before next plant"
                );
                summary.interrupted = true;
                break;
            }

            let plant = match self.plants.lookup(id) {
                Ok(plant) => plant,
                Err(e) => {
                    log_plant_skipped!(id, e);
                    let outcome = PlantOutcome::Skipped {
                        plant_id: id,
                        reason: e.to_string(),
                    };
                    println!("{}", outcome.progress_line());
                    summary.record(outcome);
                    continue;
                }
            };

            let region = Geometry::rectangle(&plant.bounding_box(half_span));
            let image = mosaic.clone().clip(&region);
            let task = ExportTask::image(image, region, id.to_string(), options.clone());

            let operation = match task.start(self.service.as_ref()).await {
                Ok(operation) => operation,
                Err(e) => {
                    let context = format!("Failed to start export for plant {id}");
                    log_error_with_context!(e, context.as_str());
                    return Err(e);
                }
            };

            log_export_submitted!(id, source, operation.name);
            let outcome = PlantOutcome::Submitted {
                plant_id: id,
                source,
                operation: operation.name,
            };
            println!("{}", outcome.progress_line());
            summary.record(outcome);
        }

        let summary = summary.with_duration(start_time.elapsed());
        tracing::info!(
            source = %source,
            requested = summary.requested,
            submitted = summary.submitted,
            skipped = summary.skipped,
            interrupted = summary.interrupted,
            duration_ms = summary.duration.as_millis() as u64,
            "Export run finished"
        );
        Ok(summary)
    }

    /// Runs every source in order over the same range
    ///
    /// # Errors
    ///
    /// Stops at the first run that fails.
    pub async fn run_all(
        &self,
        range: PlantIdRange,
        sources: &[ImageSource],
    ) -> Result<Vec<ExportSummary>> {
        let mut summaries = Vec::with_capacity(sources.len());
        for &source in sources {
            let summary = self.run(range, source).await?;
            let interrupted = summary.interrupted;
            summaries.push(summary);
            if interrupted {
                break;
            }
        }
        Ok(summaries)
    }
}
