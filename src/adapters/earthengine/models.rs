//! Earth Engine REST API request and response models
//!
//! Field names follow the API's camelCase JSON. `maxPixels` is an int64 and
//! therefore travels as a decimal string.

use super::expression::Expression;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/projects/{project}/image:export`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportImageRequest {
    /// Image computation to export
    pub expression: Expression,

    /// Human-readable task name shown in the task list
    pub description: String,

    /// Idempotency key; resubmitting the same ID does not start a second task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Pixel budget, int64 encoded as a string
    #[serde(with = "int64_string")]
    pub max_pixels: u64,

    /// Output file options
    pub file_export_options: ImageFileExportOptions,
}

/// Output file options for image exports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFileExportOptions {
    /// Output format, e.g. `GEO_TIFF`
    pub file_format: String,

    /// Google Drive destination
    pub drive_destination: DriveDestination,

    /// GeoTIFF encoding options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo_tiff_options: Option<GeoTiffOptions>,
}

/// Google Drive destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveDestination {
    /// Folder the file is written to, created if missing
    pub folder: String,

    /// File name without extension
    pub filename_prefix: String,
}

/// GeoTIFF encoding options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoTiffOptions {
    /// Do not write tiles that are entirely masked
    pub skip_empty_files: bool,
}

/// Long-running operation returned by export and status calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Resource name, `projects/{project}/operations/{id}`
    pub name: String,

    /// Whether the operation has finished (successfully or not)
    #[serde(default)]
    pub done: bool,

    /// Task progress metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OperationMetadata>,

    /// Failure details when `done` and unsuccessful
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

impl Operation {
    /// Task state reported in the metadata, or `UNKNOWN`
    pub fn state(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.state.as_deref())
            .unwrap_or("UNKNOWN")
    }

    /// True when the operation finished without error
    pub fn succeeded(&self) -> bool {
        self.done && self.error.is_none()
    }
}

/// Subset of the `OperationMetadata` message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationMetadata {
    /// PENDING, RUNNING, CANCELLING, SUCCEEDED, CANCELLED or FAILED
    #[serde(default)]
    pub state: Option<String>,

    /// Task description
    #[serde(default)]
    pub description: Option<String>,

    /// Task type, e.g. EXPORT_IMAGE
    #[serde(default, rename = "type")]
    pub task_type: Option<String>,

    /// Fraction complete in `[0, 1]`
    #[serde(default)]
    pub progress: Option<f64>,

    #[serde(default)]
    pub create_time: Option<String>,

    #[serde(default)]
    pub update_time: Option<String>,

    /// Output URIs once the task succeeded
    #[serde(default)]
    pub destination_uris: Vec<String>,
}

/// `google.rpc.Status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: i32,

    #[serde(default)]
    pub message: String,
}

/// Error envelope returned with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: Status,
}

mod int64_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => s.parse().map_err(de::Error::custom),
            Raw::Number(n) => Ok(n),
        }
    }
}
