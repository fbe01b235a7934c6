//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level or `RUST_LOG`
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use plantclip::logging::init_logging;
//! use plantclip::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a submitted export task
///
/// # Example
///
/// ```no_run
/// use plantclip::log_export_submitted;
///
/// log_export_submitted!(300, "naip", "projects/p/operations/ABC");
/// ```
#[macro_export]
macro_rules! log_export_submitted {
    ($plant_id:expr, $source:expr, $operation:expr) => {
        tracing::info!(
            plant_id = %$plant_id,
            source = %$source,
            operation = %$operation,
            "Export task started"
        );
    };
}

/// Log a plant skipped because its row could not be resolved
///
/// # Example
///
/// ```no_run
/// use plantclip::log_plant_skipped;
///
/// log_plant_skipped!(301, "plant 301 not found");
/// ```
#[macro_export]
macro_rules! log_plant_skipped {
    ($plant_id:expr, $reason:expr) => {
        tracing::warn!(
            plant_id = %$plant_id,
            reason = %$reason,
            "Skipping plant"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use plantclip::log_error_with_context;
/// use plantclip::domain::PlantClipError;
///
/// let error = PlantClipError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
