//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::{ImageSource, PlantId};
use std::time::Duration;

/// Sentinel printed for identifiers that could not be exported
pub const SKIPPED_SENTINEL: &str = "-1";

/// What happened to one plant identifier
#[derive(Debug, Clone, PartialEq)]
pub enum PlantOutcome {
    /// Export task accepted by the service
    Submitted {
        plant_id: PlantId,
        source: ImageSource,
        operation: String,
    },

    /// Lookup failed; nothing was submitted
    Skipped { plant_id: PlantId, reason: String },
}

impl PlantOutcome {
    /// Line printed to stdout: `<id>:<source>` or `-1`
    pub fn progress_line(&self) -> String {
        match self {
            PlantOutcome::Submitted {
                plant_id, source, ..
            } => format!("{plant_id}:{source}"),
            PlantOutcome::Skipped { .. } => SKIPPED_SENTINEL.to_string(),
        }
    }
}

/// Summary of one export run (one source over one identifier range)
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Source exported
    pub source: ImageSource,

    /// Identifiers looked up
    pub requested: usize,

    /// Tasks started
    pub submitted: usize,

    /// Identifiers skipped with the sentinel
    pub skipped: usize,

    /// Per-identifier outcomes, in order
    pub outcomes: Vec<PlantOutcome>,

    /// Duration of the run
    pub duration: Duration,

    /// Stopped early by a shutdown signal
    pub interrupted: bool,

    /// Requests were built but not submitted
    pub dry_run: bool,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            requested: 0,
            submitted: 0,
            skipped: 0,
            outcomes: Vec::new(),
            duration: Duration::from_secs(0),
            interrupted: false,
            dry_run: false,
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the outcome for one identifier
    pub fn record(&mut self, outcome: PlantOutcome) {
        self.requested += 1;
        match outcome {
            PlantOutcome::Submitted { .. } => self.submitted += 1,
            PlantOutcome::Skipped { .. } => self.skipped += 1,
        }
        self.outcomes.push(outcome);
    }

    /// Operation names of started tasks
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.outcomes.iter().filter_map(|o| match o {
            PlantOutcome::Submitted { operation, .. } => Some(operation.as_str()),
            PlantOutcome::Skipped { .. } => None,
        })
    }

    /// True when every identifier was submitted and the run was not interrupted
    pub fn is_successful(&self) -> bool {
        self.skipped == 0 && !self.interrupted
    }

    /// Percentage of looked-up identifiers that were submitted
    pub fn submission_rate(&self) -> f64 {
        if self.requested == 0 {
            return 100.0;
        }
        (self.submitted as f64 / self.requested as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_lines() {
        let submitted = PlantOutcome::Submitted {
            plant_id: PlantId::new(300),
            source: ImageSource::Naip,
            operation: "projects/p/operations/A".to_string(),
        };
        let skipped = PlantOutcome::Skipped {
            plant_id: PlantId::new(301),
            reason: "plant 301 not found".to_string(),
        };

        assert_eq!(submitted.progress_line(), "300:naip");
        assert_eq!(skipped.progress_line(), "-1");
    }

    #[test]
    fn test_record_counts() {
        let mut summary = ExportSummary::new(ImageSource::Ls8);
        summary.record(PlantOutcome::Submitted {
            plant_id: PlantId::new(1),
            source: ImageSource::Ls8,
            operation: "op-1".to_string(),
        });
        summary.record(PlantOutcome::Skipped {
            plant_id: PlantId::new(2),
            reason: "missing".to_string(),
        });

        assert_eq!(summary.requested, 2);
        assert_eq!(summary.submitted, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.operations().collect::<Vec<_>>(), vec!["op-1"]);
        assert!(!summary.is_successful());
        assert_eq!(summary.submission_rate(), 50.0);
    }

    #[test]
    fn test_empty_summary_is_successful() {
        let summary = ExportSummary::new(ImageSource::Naip);
        assert!(summary.is_successful());
        assert_eq!(summary.submission_rate(), 100.0);
    }
}
