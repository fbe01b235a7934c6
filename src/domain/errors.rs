//! Domain error types
//!
//! This module defines the error hierarchy for Plantclip.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Plantclip error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PlantClipError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Earth Engine-related errors
    #[error("Earth Engine error: {0}")]
    EarthEngine(#[from] EarthEngineError),

    /// Spreadsheet-related errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] SpreadsheetError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Earth Engine-specific errors
///
/// Errors that occur when talking to the Earth Engine REST API.
/// These errors don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum EarthEngineError {
    /// Failed to reach the Earth Engine endpoint
    #[error("Failed to connect to Earth Engine: {0}")]
    ConnectionFailed(String),

    /// Credentials rejected (401/403)
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Quota or rate limit exceeded (429)
    #[error("Quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Invalid response from server
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    /// Operation not found
    #[error("Operation not found: {0}")]
    OperationNotFound(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },
}

/// Spreadsheet-specific errors
///
/// Errors raised while opening or indexing the plant spreadsheet.
#[derive(Debug, Error)]
pub enum SpreadsheetError {
    /// File could not be opened or parsed
    #[error("Failed to open spreadsheet {path}: {message}")]
    OpenFailed { path: String, message: String },

    /// Requested worksheet does not exist
    #[error("Worksheet {index} not found in {path}")]
    SheetNotFound { path: String, index: usize },

    /// File extension not recognised
    #[error("Unsupported spreadsheet format: {0}")]
    UnsupportedFormat(String),

    /// A row could not be read
    #[error("Failed to read row {row}: {message}")]
    RowReadFailed { row: usize, message: String },
}

/// Recoverable per-identifier lookup failures
///
/// These never abort an export run; the identifier is reported with the
/// `-1` sentinel and skipped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// No row carries the identifier
    #[error("plant {0} not found")]
    NotFound(u32),

    /// The coordinate cell is missing or not numeric
    #[error("plant {id}: column {column} is not a valid coordinate ({value:?})")]
    InvalidCoordinate {
        id: u32,
        column: usize,
        value: String,
    },
}

// Conversion from std::io::Error
impl From<std::io::Error> for PlantClipError {
    fn from(err: std::io::Error) -> Self {
        PlantClipError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PlantClipError {
    fn from(err: serde_json::Error) -> Self {
        PlantClipError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PlantClipError {
    fn from(err: toml::de::Error) -> Self {
        PlantClipError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlantClipError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_earthengine_error_conversion() {
        let ee_err = EarthEngineError::ConnectionFailed("Network error".to_string());
        let err: PlantClipError = ee_err.into();
        assert!(matches!(err, PlantClipError::EarthEngine(_)));
    }

    #[test]
    fn test_spreadsheet_error_conversion() {
        let sheet_err = SpreadsheetError::UnsupportedFormat("txt".to_string());
        let err: PlantClipError = sheet_err.into();
        assert!(matches!(err, PlantClipError::Spreadsheet(_)));
        assert!(err.to_string().contains("txt"));
    }

    #[test]
    fn test_server_error_display() {
        let err = EarthEngineError::ServerError {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "Server error: 503 - unavailable");
    }

    #[test]
    fn test_lookup_error_display() {
        assert_eq!(LookupError::NotFound(42).to_string(), "plant 42 not found");

        let err = LookupError::InvalidCoordinate {
            id: 7,
            column: 4,
            value: "n/a".to_string(),
        };
        assert!(err.to_string().contains("column 4"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PlantClipError = io_err.into();
        assert!(matches!(err, PlantClipError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PlantClipError = toml_err.into();
        assert!(matches!(err, PlantClipError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }
}
