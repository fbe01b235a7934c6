//! Plant spreadsheet input
//!
//! Reads the eGRID plant sheet (or a CSV export of it) and indexes rows by
//! plant identifier.

pub mod reader;
pub mod table;

pub use reader::{Cell, SheetFormat};
pub use table::PlantTable;
