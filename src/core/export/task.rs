//! Export task construction
//!
//! An [`ExportTask`] is built locally and only becomes a remote job when
//! [`ExportTask::start`] submits it. The exporter never waits for the
//! resulting operation to finish.

use crate::adapters::earthengine::expression::{Geometry, Image};
use crate::adapters::earthengine::models::{
    DriveDestination, ExportImageRequest, GeoTiffOptions, ImageFileExportOptions, Operation,
};
use crate::adapters::earthengine::ImageryService;
use crate::domain::Result;
use uuid::Uuid;

/// Output file format for plant tiles
pub const FILE_FORMAT: &str = "GEO_TIFF";

/// Export parameters shared by every task of one source
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Output resolution in metres per pixel
    pub scale: f64,

    /// Skip tiles with no unmasked pixels
    pub skip_empty_tiles: bool,

    /// Pixel budget per task
    pub max_pixels: u64,

    /// Destination folder
    pub folder: String,
}

/// An image export ready to be started
#[derive(Debug, Clone)]
pub struct ExportTask {
    description: String,
    request_id: String,
    image: Image,
    region: Geometry,
    options: ExportOptions,
}

impl ExportTask {
    /// Creates an image export of `image` over `region`
    ///
    /// `description` doubles as the output file name.
    pub fn image(
        image: Image,
        region: Geometry,
        description: impl Into<String>,
        options: ExportOptions,
    ) -> Self {
        Self {
            description: description.into(),
            request_id: Uuid::new_v4().to_string(),
            image,
            region,
            options,
        }
    }

    /// Builds the REST request body
    pub fn to_request(&self) -> ExportImageRequest {
        let expression = self
            .image
            .clone()
            .clip_to_bounds_and_scale(&self.region, self.options.scale)
            .into_expression();

        ExportImageRequest {
            expression,
            description: self.description.clone(),
            request_id: Some(self.request_id.clone()),
            max_pixels: self.options.max_pixels,
            file_export_options: ImageFileExportOptions {
                file_format: FILE_FORMAT.to_string(),
                drive_destination: DriveDestination {
                    folder: self.options.folder.clone(),
                    filename_prefix: self.description.clone(),
                },
                geo_tiff_options: Some(GeoTiffOptions {
                    skip_empty_files: self.options.skip_empty_tiles,
                }),
            },
        }
    }

    /// Submits the task; returns once the service has accepted it
    ///
    /// # Errors
    ///
    /// Propagates any submission failure from the service.
    pub async fn start(&self, service: &dyn ImageryService) -> Result<Operation> {
        service.start_export(&self.to_request()).await
    }
}
