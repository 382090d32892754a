//! CSV import into a [`Grid`]
//!
//! Reads a delimited file record by record. Each record becomes one row,
//! each field is written under the edit role through [`StrictNumeric`], and
//! every resulting cell is marked selectable and editable.
//!
//! Records are never rejected: a record with more fields than seen so far
//! widens the grid, a shorter one is padded.

use crate::data::coerce::StrictNumeric;
use crate::data::error::{ImportError, ImportResult};
use crate::data::records::Records;
use crate::grid::{Grid, GridStore, ItemModel};
use crate::settings::ImportSettings;
use crate::types::ItemFlags;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

/// Imports delimited text into a grid store.
#[derive(Clone, Debug, Default)]
pub struct CsvImporter {
    settings: ImportSettings,
}

impl CsvImporter {
    pub fn new(settings: ImportSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ImportSettings {
        &self.settings
    }

    /// Load the file at `path`.
    ///
    /// Returns [`ImportError::NotFound`] if the file cannot be opened.
    pub fn load(&self, path: impl AsRef<Path>) -> ImportResult<GridStore<StrictNumeric>> {
        let path = path.as_ref();
        let start = Instant::now();

        let file = File::open(path).map_err(|source| ImportError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let store = self.load_from_reader(BufReader::new(file))?;

        tracing::debug!(
            "Loaded CSV {} with {} rows x {} cols in {:?}",
            path.display(),
            store.view().row_count(),
            store.view().column_count(),
            start.elapsed()
        );

        Ok(store)
    }

    /// Load from any buffered reader.
    pub fn load_from_reader<R: BufRead>(&self, reader: R) -> ImportResult<GridStore<StrictNumeric>> {
        let coercion = StrictNumeric::new(self.settings.numeric);
        let mut grid = Grid::new();
        let mut records = Records::new(reader, self.settings.delimiter);

        if self.settings.has_headers {
            if let Some(fields) = next_record(&mut records)? {
                for (col, label) in fields.into_iter().enumerate() {
                    grid.set_header(col, label);
                }
            }
        }

        // The cap is checked before reading, so no line past it is touched
        while self.settings.max_rows.is_none_or(|max| grid.row_count() < max) {
            let Some(fields) = next_record(&mut records)? else {
                break;
            };
            grid.append_row(fields, &coercion);
        }

        if let Some(max_rows) = self.settings.max_rows {
            if grid.row_count() >= max_rows {
                tracing::debug!(max_rows, "Row limit reached, stopping import");
            }
        }

        grid.set_all_flags(ItemFlags::SELECTABLE_EDITABLE);
        Ok(GridStore::new(grid, coercion))
    }
}

/// Read the next record, tagging a read failure with its line number.
fn next_record<R: BufRead>(records: &mut Records<R>) -> ImportResult<Option<Vec<String>>> {
    match records.next() {
        Some(Ok(fields)) => Ok(Some(fields)),
        Some(Err(source)) => Err(ImportError::Read {
            line: records.line(),
            source,
        }),
        None => Ok(None),
    }
}

/// Load `path` with the default import settings.
pub fn load(path: impl AsRef<Path>) -> ImportResult<GridStore<StrictNumeric>> {
    CsvImporter::default().load(path)
}
