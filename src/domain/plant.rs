//! Power plant records and the crop rectangle derived from them

use super::ids::PlantId;
use serde::{Deserialize, Serialize};

/// Default half-span of the crop rectangle, in degrees
pub const DEFAULT_HALF_SPAN_DEGREES: f64 = 0.005;

/// A plant row resolved from the spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    /// eGRID plant identifier
    pub id: PlantId,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl PlantRecord {
    /// Create a new plant record
    pub fn new(id: PlantId, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
        }
    }

    /// Rectangle centered on the plant, extending `half_span` degrees each way
    pub fn bounding_box(&self, half_span: f64) -> BoundingBox {
        BoundingBox::centered(self.latitude, self.longitude, half_span)
    }
}

/// Axis-aligned rectangle in longitude/latitude degrees
///
/// Coordinates follow the `[xMin, yMin, xMax, yMax]` order expected by
/// `GeometryConstructors.Rectangle`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl BoundingBox {
    /// Builds a rectangle centered on `(latitude, longitude)`
    pub fn centered(latitude: f64, longitude: f64, half_span: f64) -> Self {
        Self {
            west: longitude - half_span,
            south: latitude - half_span,
            east: longitude + half_span,
            north: latitude + half_span,
        }
    }

    /// Coordinates as `[west, south, east, north]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }
}
