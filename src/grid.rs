//! The in-memory grid and the item-model contract display collaborators read.
//!
//! A [`Grid`] is a rectangle of [`Cell`]s: every row has the same number of
//! columns, and rows keep the order they were appended in. Appending a row
//! that is wider than the grid pads every existing row.
//!
//! After import the grid lives inside a [`GridStore`], its single owner.
//! Consumers borrow it read-only through [`ItemModel`]; edits go through the
//! store so they always pass its coercion.

use crate::data::Coerce;
use crate::types::{Cell, CellValue, ItemFlags, Role};
use serde::{Deserialize, Serialize};

/// Read access to a 2-D model of role-tagged cells.
pub trait ItemModel {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Value stored under `role` at `(row, col)`, `None` when out of range or unset.
    fn data(&self, row: usize, col: usize, role: Role) -> Option<&CellValue>;

    /// Capability flags at `(row, col)`, no flags when out of range.
    fn flags(&self, row: usize, col: usize) -> ItemFlags;

    /// Header label for a column, if the source had a header record.
    fn header_data(&self, col: usize) -> Option<&str>;
}

/// Rows of cells with a uniform column count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
    columns: usize,
    headers: Vec<Option<String>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Widen every row (and the header list) to at least `columns` cells.
    pub fn ensure_columns(&mut self, columns: usize) {
        if columns <= self.columns {
            return;
        }
        tracing::trace!(from = self.columns, to = columns, "Widening grid");
        self.columns = columns;
        for row in &mut self.rows {
            row.resize_with(columns, Cell::default);
        }
        self.headers.resize(columns, None);
    }

    /// Append a row built from `fields`, each written under the edit role.
    ///
    /// Returns the index of the new row.
    pub fn append_row<C: Coerce>(&mut self, fields: Vec<String>, coercion: &C) -> usize {
        self.ensure_columns(fields.len());

        let mut row: Vec<Cell> = Vec::with_capacity(self.columns);
        for field in fields {
            let mut cell = Cell::new();
            set_cell_value(&mut cell, Role::Edit, CellValue::Text(field), coercion);
            row.push(cell);
        }
        row.resize_with(self.columns, Cell::default);

        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Write `value` under `role` at `(row, col)` through `coercion`.
    ///
    /// Returns `false` if the position is outside the grid.
    pub fn set_data<C: Coerce>(
        &mut self,
        row: usize,
        col: usize,
        role: Role,
        value: CellValue,
        coercion: &C,
    ) -> bool {
        match self.cell_mut(row, col) {
            Some(cell) => {
                set_cell_value(cell, role, value, coercion);
                true
            }
            None => false,
        }
    }

    /// Set the header label for a column, widening the grid if needed.
    pub fn set_header(&mut self, col: usize, label: impl Into<String>) {
        self.ensure_columns(col + 1);
        self.headers[col] = Some(label.into());
    }

    pub fn set_all_flags(&mut self, flags: ItemFlags) {
        for cell in self.rows.iter_mut().flatten() {
            cell.set_flags(flags);
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(|r| r.as_slice())
    }
}

impl ItemModel for Grid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn data(&self, row: usize, col: usize, role: Role) -> Option<&CellValue> {
        self.cell(row, col).and_then(|c| c.data(role))
    }

    fn flags(&self, row: usize, col: usize) -> ItemFlags {
        self.cell(row, col).map(|c| c.flags()).unwrap_or_default()
    }

    fn header_data(&self, col: usize) -> Option<&str> {
        self.headers.get(col).and_then(|h| h.as_deref())
    }
}

/// Store `value` in `cell` under `role`.
///
/// The display value is always the value as written. An edit-role write also
/// stores the coerced value as the cell's edit value.
pub fn set_cell_value<C: Coerce>(cell: &mut Cell, role: Role, value: CellValue, coercion: &C) {
    match role {
        Role::Display => cell.store_display(value),
        Role::Edit => {
            let coerced = coercion.coerce(value.clone());
            cell.store_display(value);
            cell.store_edit(coerced);
        }
    }
}

/// Single owner of an imported grid.
///
/// Hands out read-only views and applies edits through its coercion.
#[derive(Debug)]
pub struct GridStore<C> {
    grid: Grid,
    coercion: C,
}

impl<C: Coerce> GridStore<C> {
    pub fn new(grid: Grid, coercion: C) -> Self {
        Self { grid, coercion }
    }

    /// Borrow the grid for reading.
    pub fn view(&self) -> &Grid {
        &self.grid
    }

    /// Edit a cell; returns `false` when the position does not exist or the
    /// cell is not editable.
    pub fn set_data(&mut self, row: usize, col: usize, role: Role, value: CellValue) -> bool {
        if !self.grid.flags(row, col).editable {
            return false;
        }
        self.grid.set_data(row, col, role, value, &self.coercion)
    }

    pub fn coercion(&self) -> &C {
        &self.coercion
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}
