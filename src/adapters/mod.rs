//! External integrations
//!
//! - [`earthengine`] - Earth Engine REST API (export submission, operation status)
//! - [`spreadsheet`] - plant spreadsheet input

pub mod earthengine;
pub mod spreadsheet;
