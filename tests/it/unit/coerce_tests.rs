//! Unit tests for numeric coercion.

use csvgrid::data::{Coerce, NumericPolicy, StrictNumeric, TrailingTerminator, Verbatim};
use csvgrid::grid::set_cell_value;
use csvgrid::types::{Cell, CellValue, Role};

#[test]
fn test_literals_parse_to_their_double() {
    let c = StrictNumeric::default();
    let cases = [
        ("42", 42.0),
        ("0", 0.0),
        ("-7.25", -7.25),
        ("6.02e23", 6.02e23),
        ("1E-3", 1e-3),
        ("5.", 5.0),
    ];
    for (input, expected) in cases {
        assert_eq!(c.coerce(input.into()), CellValue::Number(expected), "input {:?}", input);
    }
}

#[test]
fn test_trailing_content_keeps_text() {
    let c = StrictNumeric::default();
    for input in ["3.5kg", "", "abc", "12abc", "42 ", "1.2.3", "--1", "1e", " "] {
        assert_eq!(c.coerce(input.into()), CellValue::text(input), "input {:?}", input);
    }
}

#[test]
fn test_special_literals() {
    let c = StrictNumeric::default();
    assert_eq!(c.coerce("inf".into()), CellValue::Number(f64::INFINITY));
    assert_eq!(c.coerce("-infinity".into()), CellValue::Number(f64::NEG_INFINITY));
    assert!(matches!(c.coerce("NaN".into()), CellValue::Number(n) if n.is_nan()));
}

#[test]
fn test_trailing_space_versus_terminator() {
    let default = StrictNumeric::default();
    assert_eq!(default.coerce("42 ".into()), CellValue::text("42 "));
    assert_eq!(default.coerce("42\0".into()), CellValue::Number(42.0));

    let strict = StrictNumeric::new(NumericPolicy {
        trailing: TrailingTerminator::Reject,
        skip_leading_whitespace: false,
    });
    assert_eq!(strict.coerce("42\0".into()), CellValue::text("42\0"));
    assert_eq!(strict.coerce(" 42".into()), CellValue::text(" 42"));
}

#[test]
fn test_double_coercion_keeps_number() {
    let c = StrictNumeric::default();
    let mut cell = Cell::new();
    set_cell_value(&mut cell, Role::Edit, "2.5".into(), &c);
    let first = cell.data(Role::Edit).cloned().unwrap();

    set_cell_value(&mut cell, Role::Edit, first.clone(), &c);
    assert_eq!(cell.data(Role::Edit), Some(&first));
    assert_eq!(first, CellValue::Number(2.5));
}

#[test]
fn test_failed_coercion_stores_original_value() {
    let mut cell = Cell::new();
    set_cell_value(&mut cell, Role::Edit, "four".into(), &StrictNumeric::default());

    assert_eq!(cell.data(Role::Edit), Some(&CellValue::text("four")));
    assert_eq!(cell.data(Role::Display), Some(&CellValue::text("four")));
}

#[test]
fn test_strategy_is_pluggable() {
    let mut cell = Cell::new();
    set_cell_value(&mut cell, Role::Edit, "12".into(), &Verbatim);
    assert_eq!(cell.data(Role::Edit), Some(&CellValue::text("12")));

    let always_zero = |_: CellValue| CellValue::Number(0.0);
    set_cell_value(&mut cell, Role::Edit, "12".into(), &always_zero);
    assert_eq!(cell.data(Role::Edit), Some(&CellValue::Number(0.0)));
    assert_eq!(cell.data(Role::Display), Some(&CellValue::text("12")));
}
