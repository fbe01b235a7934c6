//! Raw cell readers for workbook and CSV files
//!
//! Both readers produce the same row-of-[`Cell`] shape so the plant table does
//! not care where rows came from.

use crate::domain::{Result, SpreadsheetError};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// A spreadsheet cell reduced to what plant lookups need
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Classifies free text, treating anything that parses as a float as a number
    pub fn from_text(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Cell::Empty
        } else if let Ok(n) = trimmed.parse::<f64>() {
            Cell::Number(n)
        } else {
            Cell::Text(trimmed.to_string())
        }
    }

    /// Numeric value, parsing text cells the way a float conversion would
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse().ok(),
            Cell::Empty => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Number(n) => write!(f, "{n}"),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(b) => Cell::Text(b.to_string()),
            Data::Empty => Cell::Empty,
            other => Cell::Text(other.to_string()),
        }
    }
}

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFormat {
    Workbook,
    Csv,
}

impl SheetFormat {
    /// Detects the format from the path's extension
    pub fn detect(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SheetFormat::Workbook),
            "csv" => Ok(SheetFormat::Csv),
            _ => Err(SpreadsheetError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}

/// Reads every row of the worksheet at `sheet_index`
pub fn read_workbook(path: &Path, sheet_index: usize) -> Result<Vec<Vec<Cell>>> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SpreadsheetError::OpenFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(sheet_index)
        .ok_or_else(|| SpreadsheetError::SheetNotFound {
            path: path.display().to_string(),
            index: sheet_index,
        })?
        .map_err(|e| SpreadsheetError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(Cell::from).collect())
        .collect())
}

/// Reads every record of a header-agnostic CSV file
pub fn read_csv(path: &Path) -> Result<Vec<Vec<Cell>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| SpreadsheetError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| SpreadsheetError::RowReadFailed {
            row: index,
            message: e.to_string(),
        })?;
        rows.push(record.iter().map(Cell::from_text).collect());
    }
    Ok(rows)
}
