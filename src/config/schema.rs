//! Configuration schema types
//!
//! This module defines the configuration structure for Plantclip.

use crate::config::SecretString;
use crate::domain::{ImageSource, PlantIdRange};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Main Plantclip configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PlantClipConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Earth Engine connection settings
    pub earthengine: EarthEngineConfig,

    /// Plant spreadsheet location and layout
    #[serde(default)]
    pub plants: PlantsConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PlantClipConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.earthengine.validate()?;
        self.plants.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (build export requests without submitting them)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Earth Engine REST API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EarthEngineConfig {
    /// API root, without the `/v1` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Google Cloud project registered for Earth Engine
    pub project: String,

    /// OAuth2 access token sent as a bearer token
    ///
    /// Only required when exports are actually submitted. Obtain one with
    /// `gcloud auth print-access-token` and pass it via `${EE_ACCESS_TOKEN}`.
    #[serde(default)]
    pub access_token: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl EarthEngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("earthengine.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("earthengine.base_url must start with http:// or https://".to_string());
        }

        if self.project.trim().is_empty() {
            return Err("earthengine.project cannot be empty".to_string());
        }

        if self.timeout_seconds == 0 {
            return Err("earthengine.timeout_seconds must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for EarthEngineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            project: String::new(),
            access_token: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Plant spreadsheet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantsConfig {
    /// Path to the plant table (.xlsx, .xls, .xlsb, .ods or .csv)
    #[serde(default = "default_plants_path")]
    pub path: String,

    /// Zero-based worksheet index (ignored for CSV)
    #[serde(default)]
    pub sheet_index: usize,

    /// Column holding the plant identifier
    #[serde(default)]
    pub id_column: usize,

    /// Column holding the latitude
    #[serde(default = "default_latitude_column")]
    pub latitude_column: usize,

    /// Column holding the longitude
    #[serde(default = "default_longitude_column")]
    pub longitude_column: usize,
}

impl PlantsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.trim().is_empty() {
            return Err("plants.path cannot be empty".to_string());
        }

        let columns = [self.id_column, self.latitude_column, self.longitude_column];
        for (i, a) in columns.iter().enumerate() {
            if columns[i + 1..].contains(a) {
                return Err(format!(
                    "plants columns must be distinct, column {a} is used twice"
                ));
            }
        }

        Ok(())
    }
}

impl Default for PlantsConfig {
    fn default() -> Self {
        Self {
            path: default_plants_path(),
            sheet_index: 0,
            id_column: 0,
            latitude_column: default_latitude_column(),
            longitude_column: default_longitude_column(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// First plant ID to export (inclusive)
    #[serde(default = "default_id_start")]
    pub id_start: u32,

    /// Last plant ID to export (exclusive)
    #[serde(default = "default_id_end")]
    pub id_end: u32,

    /// Image sources to export, in order
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,

    /// Half-span of the crop rectangle in degrees
    #[serde(default = "default_half_span_degrees")]
    pub half_span_degrees: f64,

    /// Maximum number of pixels per export
    #[serde(default = "default_max_pixels")]
    pub max_pixels: u64,

    /// Skip writing tiles that are entirely masked
    #[serde(default = "default_true")]
    pub skip_empty_tiles: bool,

    /// Destination folder prefix; the source name is appended
    #[serde(default = "default_folder_prefix")]
    pub folder_prefix: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        self.id_range()?;
        self.image_sources()?;

        if !(self.half_span_degrees > 0.0 && self.half_span_degrees <= 1.0) {
            return Err(format!(
                "export.half_span_degrees must be in (0, 1], got {}",
                self.half_span_degrees
            ));
        }

        if self.max_pixels == 0 || self.max_pixels > MAX_PIXELS_LIMIT {
            return Err(format!(
                "export.max_pixels must be between 1 and {MAX_PIXELS_LIMIT}, got {}",
                self.max_pixels
            ));
        }

        if self.folder_prefix.trim().is_empty() {
            return Err("export.folder_prefix cannot be empty".to_string());
        }

        Ok(())
    }

    /// Identifier range to export
    pub fn id_range(&self) -> Result<PlantIdRange, String> {
        PlantIdRange::new(self.id_start, self.id_end)
    }

    /// Parses the configured source names
    ///
    /// # Errors
    ///
    /// Returns the diagnostic for the first unrecognised source, or an error
    /// if the list is empty.
    pub fn image_sources(&self) -> Result<Vec<ImageSource>, String> {
        if self.sources.is_empty() {
            return Err("export.sources cannot be empty".to_string());
        }
        self.sources
            .iter()
            .map(|s| ImageSource::from_str(s))
            .collect()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            id_start: default_id_start(),
            id_end: default_id_end(),
            sources: default_sources(),
            half_span_degrees: default_half_span_degrees(),
            max_pixels: default_max_pixels(),
            skip_empty_tiles: true,
            folder_prefix: default_folder_prefix(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

/// Upper bound Earth Engine accepts for `maxPixels`
pub const MAX_PIXELS_LIMIT: u64 = 10_000_000_000_000;

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "https://earthengine.googleapis.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    60
}

fn default_plants_path() -> String {
    "egrid2014_data_v2_PLNT14.xlsx".to_string()
}

fn default_latitude_column() -> usize {
    4
}

fn default_longitude_column() -> usize {
    5
}

fn default_id_start() -> u32 {
    300
}

fn default_id_end() -> u32 {
    500
}

fn default_sources() -> Vec<String> {
    ImageSource::ALL.iter().map(|s| s.name().to_string()).collect()
}

fn default_half_span_degrees() -> f64 {
    crate::domain::DEFAULT_HALF_SPAN_DEGREES
}

fn default_max_pixels() -> u64 {
    1_000_000_000
}

fn default_folder_prefix() -> String {
    "PowerPlants_".to_string()
}

fn default_true() -> bool {
    true
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
