//! Plant table indexed by identifier

use super::reader::{read_csv, read_workbook, Cell, SheetFormat};
use crate::config::PlantsConfig;
use crate::domain::{LookupError, PlantId, PlantRecord, Result};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
struct IndexedRow {
    row: usize,
    latitude: Cell,
    longitude: Cell,
}

/// In-memory plant table
///
/// Rows are indexed by the identifier column once at load. Rows whose id
/// cell is not an integer (headers, notes, blanks) are ignored.
///
/// # Example
///
/// ```rust
/// use plantclip::adapters::spreadsheet::{Cell, PlantTable};
/// use plantclip::config::PlantsConfig;
/// use plantclip::domain::PlantId;
///
/// let rows = vec![vec![
///     Cell::Number(300.0), Cell::Empty, Cell::Empty, Cell::Empty,
///     Cell::Number(35.0), Cell::Number(-80.0),
/// ]];
/// let table = PlantTable::from_rows(rows, &PlantsConfig::default());
/// let plant = table.lookup(PlantId::new(300)).unwrap();
/// assert_eq!(plant.latitude, 35.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlantTable {
    index: HashMap<PlantId, IndexedRow>,
    latitude_column: usize,
    longitude_column: usize,
}

impl PlantTable {
    /// Loads the plant table described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, its format is unsupported, or
    /// the requested worksheet cannot be read.
    pub fn open(config: &PlantsConfig) -> Result<Self> {
        let path = Path::new(&config.path);

        let rows = match SheetFormat::detect(path)? {
            SheetFormat::Workbook => read_workbook(path, config.sheet_index)?,
            SheetFormat::Csv => read_csv(path)?,
        };

        let table = Self::from_rows(rows, config);
        tracing::info!(
            path = %config.path,
            plants = table.len(),
            "Loaded plant table"
        );
        Ok(table)
    }

    /// Builds a table from already-read rows
    pub fn from_rows<I>(rows: I, config: &PlantsConfig) -> Self
    where
        I: IntoIterator<Item = Vec<Cell>>,
    {
        let mut index: HashMap<PlantId, IndexedRow> = HashMap::new();

        for (row_number, mut row) in rows.into_iter().enumerate() {
            let id = match row.get(config.id_column) {
                Some(Cell::Number(n)) => match PlantId::from_cell_number(*n) {
                    Some(id) => id,
                    None => continue,
                },
                _ => continue,
            };

            if let Some(existing) = index.get(&id) {
                tracing::warn!(
                    plant_id = %id,
                    kept_row = existing.row,
                    duplicate_row = row_number,
                    "Duplicate plant ID, keeping first row"
                );
                continue;
            }

            let mut take = |column: usize| {
                row.get_mut(column)
                    .map(|cell| std::mem::replace(cell, Cell::Empty))
                    .unwrap_or(Cell::Empty)
            };
            let latitude = take(config.latitude_column);
            let longitude = take(config.longitude_column);

            index.insert(
                id,
                IndexedRow {
                    row: row_number,
                    latitude,
                    longitude,
                },
            );
        }

        Self {
            index,
            latitude_column: config.latitude_column,
            longitude_column: config.longitude_column,
        }
    }

    /// Resolves a plant's coordinates
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] if no row carries `id`, or
    /// [`LookupError::InvalidCoordinate`] if a coordinate cell is not numeric.
    pub fn lookup(&self, id: PlantId) -> std::result::Result<PlantRecord, LookupError> {
        let row = self
            .index
            .get(&id)
            .ok_or(LookupError::NotFound(id.value()))?;

        let latitude = coordinate(id, &row.latitude, self.latitude_column)?;
        let longitude = coordinate(id, &row.longitude, self.longitude_column)?;

        Ok(PlantRecord::new(id, latitude, longitude))
    }

    /// Number of indexed plants
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if no plant rows were found
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn coordinate(
    id: PlantId,
    cell: &Cell,
    column: usize,
) -> std::result::Result<f64, LookupError> {
    cell.as_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LookupError::InvalidCoordinate {
            id: id.value(),
            column,
            value: cell.to_string(),
        })
}
