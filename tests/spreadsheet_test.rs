//! Integration tests for loading plant tables from disk

use plantclip::adapters::spreadsheet::PlantTable;
use plantclip::config::PlantsConfig;
use plantclip::domain::{LookupError, PlantClipError, PlantId, SpreadsheetError};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

const EGRID_SAMPLE: &str = "\
SEQPLT14,PSTATABB,PNAME,ORISPL,LAT,LON
Plant file sequence number,Plant state abbreviation,Plant name,DOE/EIA ORIS plant or facility code,Plant latitude,Plant longitude
300,AL,Barry,3,31.0069,-88.0103
301,AL,Charles R Lowman,56,31.4867,-87.9106
302,AZ,Unknown Site,99,unknown,-112.0
";

fn csv_file(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn config_for(file: &NamedTempFile) -> PlantsConfig {
    PlantsConfig {
        path: file.path().to_string_lossy().to_string(),
        ..Default::default()
    }
}

#[test]
fn test_open_csv_and_lookup() {
    let file = csv_file(EGRID_SAMPLE);
    let table = PlantTable::open(&config_for(&file)).unwrap();

    assert_eq!(table.len(), 3);

    let barry = table.lookup(PlantId::new(300)).unwrap();
    assert_eq!(barry.latitude, 31.0069);
    assert_eq!(barry.longitude, -88.0103);
}

#[test]
fn test_csv_missing_and_malformed_rows() {
    let file = csv_file(EGRID_SAMPLE);
    let table = PlantTable::open(&config_for(&file)).unwrap();

    assert_eq!(
        table.lookup(PlantId::new(303)),
        Err(LookupError::NotFound(303))
    );
    assert!(matches!(
        table.lookup(PlantId::new(302)),
        Err(LookupError::InvalidCoordinate { id: 302, column: 4, .. })
    ));
}

#[test]
fn test_csv_ragged_rows_are_tolerated() {
    let file = csv_file("ID,,,,LAT,LON\n10,,,,45.5,-120.25\n11,only-two-cells\n");
    let table = PlantTable::open(&config_for(&file)).unwrap();

    assert!(table.lookup(PlantId::new(10)).is_ok());
    assert!(matches!(
        table.lookup(PlantId::new(11)),
        Err(LookupError::InvalidCoordinate { id: 11, .. })
    ));
}

#[test]
fn test_unsupported_extension() {
    let file = Builder::new().suffix(".txt").tempfile().unwrap();
    let err = PlantTable::open(&config_for(&file)).unwrap_err();

    assert!(matches!(
        err,
        PlantClipError::Spreadsheet(SpreadsheetError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_workbook() {
    let config = PlantsConfig {
        path: "/nonexistent/egrid.xlsx".to_string(),
        ..Default::default()
    };
    let err = PlantTable::open(&config).unwrap_err();

    assert!(matches!(
        err,
        PlantClipError::Spreadsheet(SpreadsheetError::OpenFailed { .. })
    ));
}
