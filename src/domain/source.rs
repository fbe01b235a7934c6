//! Imagery sources a plant tile can be cut from

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Imagery source selection
///
/// Each source fixes a collection, a date window and the export scale in metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// USDA NAIP orthophotos, mosaicked, 1 m
    Naip,
    /// Landsat 8 TOA median composite, pan-sharpened to 15 m
    Ls8,
}

impl ImageSource {
    /// All supported sources, in default export order
    pub const ALL: [ImageSource; 2] = [ImageSource::Naip, ImageSource::Ls8];

    /// Short name used on the command line and in folder names
    pub fn name(&self) -> &'static str {
        match self {
            ImageSource::Naip => "naip",
            ImageSource::Ls8 => "ls8",
        }
    }

    /// Earth Engine collection ID
    pub fn collection_id(&self) -> &'static str {
        match self {
            ImageSource::Naip => "USDA/NAIP/DOQQ",
            ImageSource::Ls8 => "LANDSAT/LC8_L1T_TOA",
        }
    }

    /// Export resolution in metres per pixel
    pub fn scale(&self) -> f64 {
        match self {
            ImageSource::Naip => 1.0,
            ImageSource::Ls8 => 15.0,
        }
    }

    /// Date filter window `(start, end)` applied to the collection
    pub fn date_window(&self) -> (NaiveDate, NaiveDate) {
        match self {
            ImageSource::Naip => (ymd(2012, 1, 1), ymd(2014, 12, 31)),
            ImageSource::Ls8 => (ymd(2014, 1, 1), ymd(2014, 12, 30)),
        }
    }

    /// Destination folder for this source, e.g. `PowerPlants_naip`
    pub fn folder(&self, prefix: &str) -> String {
        format!("{prefix}{}", self.name())
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // Constant dates above are all valid calendar days.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ImageSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "naip" => Ok(ImageSource::Naip),
            "ls8" => Ok(ImageSource::Ls8),
            other => Err(format!(
                "Cannot find {other} collections. Please choose between 'naip' and 'ls8'."
            )),
        }
    }
}
