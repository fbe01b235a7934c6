//! Domain models and types for Plantclip.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PlantId`], [`PlantIdRange`])
//! - **Domain models** ([`PlantRecord`], [`BoundingBox`], [`ImageSource`])
//! - **Error types** ([`PlantClipError`], [`EarthEngineError`], [`SpreadsheetError`], [`LookupError`])
//! - **Result type alias** ([`Result`])
//!
//! # Example
//!
//! ```rust
//! use plantclip::domain::{ImageSource, PlantId, PlantRecord};
//! use std::str::FromStr;
//!
//! let plant = PlantRecord::new(PlantId::new(300), 35.0, -80.0);
//! let bbox = plant.bounding_box(0.005);
//! let source = ImageSource::from_str("naip").unwrap();
//!
//! assert_eq!(source.scale(), 1.0);
//! assert!(bbox.west < bbox.east);
//! ```

pub mod errors;
pub mod ids;
pub mod plant;
pub mod result;
pub mod source;

// Re-export commonly used types for convenience
pub use errors::{EarthEngineError, LookupError, PlantClipError, SpreadsheetError};
pub use ids::{PlantId, PlantIdRange};
pub use plant::{BoundingBox, PlantRecord, DEFAULT_HALF_SPAN_DEGREES};
pub use result::Result;
pub use source::ImageSource;
