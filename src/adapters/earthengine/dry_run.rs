//! Dry-run imagery service
//!
//! Builds and logs export requests without any network I/O. Every request is
//! answered with a synthetic, already-finished operation.

use super::models::{ExportImageRequest, Operation, OperationMetadata};
use super::service::ImageryService;
use crate::domain::{PlantClipError, Result};
use async_trait::async_trait;

/// Imagery service that never contacts Earth Engine
#[derive(Debug, Clone)]
pub struct DryRunService {
    project: String,
}

impl DryRunService {
    /// Create a dry-run service attributed to `project`
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
        }
    }
}

#[async_trait]
impl ImageryService for DryRunService {
    async fn start_export(&self, request: &ExportImageRequest) -> Result<Operation> {
        let body = serde_json::to_string(request)?;
        tracing::debug!(
            description = %request.description,
            body = %body,
            "Dry run: export request not submitted"
        );

        Ok(Operation {
            name: format!(
                "projects/{}/operations/dry-run-{}",
                self.project, request.description
            ),
            done: true,
            metadata: Some(OperationMetadata {
                state: Some("DRY_RUN".to_string()),
                description: Some(request.description.clone()),
                task_type: Some("EXPORT_IMAGE".to_string()),
                ..Default::default()
            }),
            error: None,
        })
    }

    async fn get_operation(&self, name: &str) -> Result<Operation> {
        Err(PlantClipError::Validation(format!(
            "Cannot look up operation {name} in dry-run mode"
        )))
    }

    fn project(&self) -> &str {
        &self.project
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}
