//! Imagery service trait definition
//!
//! This module defines the `ImageryService` trait that abstracts the remote
//! platform export tasks are submitted to. The exporter only talks to this
//! trait, so the HTTP client, the dry-run implementation and test doubles are
//! interchangeable.

use super::models::{ExportImageRequest, Operation};
use crate::domain::Result;
use async_trait::async_trait;

/// Trait for services that accept image export tasks
///
/// # Example
///
/// ```no_run
/// use plantclip::adapters::earthengine::{EarthEngineClient, ImageryService};
/// use plantclip::config::EarthEngineConfig;
///
/// # async fn example(config: EarthEngineConfig) -> plantclip::domain::Result<()> {
/// let client = EarthEngineClient::initialize(config)?;
/// let operation = client
///     .get_operation("projects/ee-plants/operations/ABC123")
///     .await?;
/// println!("{} is {}", operation.name, operation.state());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ImageryService: Send + Sync {
    /// Submit and start an image export task
    ///
    /// Returns as soon as the task is accepted; the export itself runs
    /// asynchronously on the remote side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected or the service is unreachable.
    async fn start_export(&self, request: &ExportImageRequest) -> Result<Operation>;

    /// Fetch the current state of an operation by resource name
    ///
    /// # Errors
    ///
    /// Returns an error if the operation does not exist or the request fails.
    async fn get_operation(&self, name: &str) -> Result<Operation>;

    /// Cloud project tasks are billed to
    fn project(&self) -> &str;

    /// True when submissions are simulated
    fn is_dry_run(&self) -> bool {
        false
    }
}
