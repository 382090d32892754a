//! Unit tests for the grid and its item-model contract.

use crate::helpers::TestGridBuilder;
use csvgrid::data::StrictNumeric;
use csvgrid::grid::{Grid, GridStore, ItemModel};
use csvgrid::types::{CellValue, ItemFlags, Role};

#[test]
fn test_column_count_is_widest_record() {
    let grid = TestGridBuilder::new()
        .with_record(&["a"])
        .with_record(&["a", "b", "c", "d"])
        .with_record(&["a", "b"])
        .build_grid();

    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 4);
    for row in grid.rows() {
        assert_eq!(row.len(), 4);
    }
}

#[test]
fn test_padding_cells_are_empty_but_editable() {
    let grid = TestGridBuilder::new()
        .with_record(&["1"])
        .with_record(&["1", "2"])
        .build_grid();

    assert!(grid.data(0, 1, Role::Display).is_none());
    assert!(grid.data(0, 1, Role::Edit).is_none());
    assert_eq!(grid.flags(0, 1), ItemFlags::SELECTABLE_EDITABLE);
}

#[test]
fn test_rows_keep_file_order() {
    let grid = TestGridBuilder::new()
        .with_record(&["c"])
        .with_record(&["a"])
        .with_record(&["b"])
        .with_record(&["a"])
        .build_grid();

    let column: Vec<String> = (0..grid.row_count())
        .map(|r| grid.data(r, 0, Role::Display).unwrap().to_string())
        .collect();
    assert_eq!(column, vec!["c", "a", "b", "a"]);
}

#[test]
fn test_store_edit_updates_both_roles() {
    let mut store = TestGridBuilder::new().with_record(&["x", "1"]).build();

    assert!(store.set_data(0, 0, Role::Edit, "17".into()));
    assert_eq!(store.view().data(0, 0, Role::Edit), Some(&CellValue::Number(17.0)));
    assert_eq!(store.view().data(0, 0, Role::Display), Some(&CellValue::text("17")));

    assert!(store.set_data(0, 1, Role::Edit, "n/a".into()));
    assert_eq!(store.view().data(0, 1, Role::Edit), Some(&CellValue::text("n/a")));

    assert!(!store.set_data(3, 0, Role::Edit, "1".into()));
}

#[test]
fn test_store_number_writes() {
    let mut store = TestGridBuilder::new().with_record(&["0"]).build();

    assert!(store.set_data(0, 0, Role::Edit, CellValue::Number(2.5)));
    assert_eq!(store.view().data(0, 0, Role::Edit), Some(&CellValue::Number(2.5)));
    assert_eq!(store.view().data(0, 0, Role::Display), Some(&CellValue::Number(2.5)));
}

#[test]
fn test_views_are_read_only_trait_objects() {
    fn total(model: &dyn ItemModel) -> f64 {
        (0..model.row_count())
            .flat_map(|r| (0..model.column_count()).map(move |c| (r, c)))
            .filter_map(|(r, c)| model.data(r, c, Role::Edit).and_then(|v| v.as_number()))
            .sum()
    }

    let store: GridStore<StrictNumeric> = TestGridBuilder::new()
        .with_record(&["label", "1", "2"])
        .with_record(&["other", "3", "x"])
        .build();
    assert_eq!(total(store.view()), 6.0);
}

#[test]
fn test_empty_grid() {
    let grid = Grid::new();
    assert_eq!(grid.row_count(), 0);
    assert_eq!(grid.column_count(), 0);
    assert!(grid.header_data(0).is_none());
}
