//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for eGRID plant identifiers and
//! the half-open identifier range an export walks over.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Power plant identifier newtype wrapper
///
/// Wraps the eGRID plant code (column 0 of the plant sheet). The decimal form
/// is used as the export task description and output file name.
///
/// # Examples
///
/// ```
/// use plantclip::domain::ids::PlantId;
/// use std::str::FromStr;
///
/// let id = PlantId::from_str("300").unwrap();
/// assert_eq!(id.value(), 300);
/// assert_eq!(id.to_string(), "300");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlantId(u32);

impl PlantId {
    /// Creates a new PlantId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric identifier
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Interprets a spreadsheet number as a plant identifier
    ///
    /// Spreadsheet cells store integers as floats. Only finite, non-negative,
    /// integral values within `u32` range are accepted.
    pub fn from_cell_number(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Some(Self(value as u32))
        } else {
            None
        }
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlantId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Plant ID cannot be empty".to_string());
        }
        trimmed
            .parse::<u32>()
            .map(Self)
            .map_err(|e| format!("Invalid plant ID '{trimmed}': {e}"))
    }
}

impl From<u32> for PlantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Half-open range of plant identifiers `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct PlantIdRange {
    start: u32,
    end: u32,
}

impl PlantIdRange {
    /// Creates a new range
    ///
    /// # Errors
    ///
    /// Returns an error if `start > end`. An empty range (`start == end`) is allowed.
    pub fn new(start: u32, end: u32) -> Result<Self, String> {
        if start > end {
            return Err(format!(
                "Invalid plant ID range: start ({start}) must not exceed end ({end})"
            ));
        }
        Ok(Self { start, end })
    }

    /// First identifier (inclusive)
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last identifier (exclusive)
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of identifiers in the range
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize
    }

    /// Returns true if the range contains no identifiers
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterates over the identifiers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = PlantId> {
        (self.start..self.end).map(PlantId::new)
    }
}

#[derive(Deserialize)]
struct RangeBounds {
    start: u32,
    end: u32,
}

impl TryFrom<RangeBounds> for PlantIdRange {
    type Error = String;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.start, bounds.end)
    }
}

impl fmt::Display for PlantIdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
