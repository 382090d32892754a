//! Core types for the tabular import model.
//!
//! Cells hold role-tagged values. A value is either text or a number, never
//! an untyped slot, so consumers match on [`CellValue`] instead of inspecting
//! types at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Roles & Values
// ============================================================================

/// Distinguishes a cell's display text from its semantically typed value.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Text shown to the user, stored verbatim
    Display,
    /// Typed value used for editing and computation (charts, sorting)
    Edit,
}

/// A single value held by a cell under some role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// The number held by this value, if it is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// The text held by this value, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            CellValue::Number(_) => None,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, CellValue::Number(_))
    }
}

impl fmt::Display for CellValue {
    /// Numbers use Rust's shortest round-trip formatting, so the text form of
    /// a number always parses back to the same `f64`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

// ============================================================================
// Flags
// ============================================================================

/// Capability flags a display collaborator consults before interacting with a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFlags {
    pub selectable: bool,
    pub editable: bool,
}

impl ItemFlags {
    pub const NONE: ItemFlags = ItemFlags {
        selectable: false,
        editable: false,
    };

    pub const SELECTABLE_EDITABLE: ItemFlags = ItemFlags {
        selectable: true,
        editable: true,
    };
}

// ============================================================================
// Cell
// ============================================================================

/// A grid cell: a display value, an edit value and capability flags.
///
/// Cells created to pad a short row hold no values at all.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    display: Option<CellValue>,
    edit: Option<CellValue>,
    flags: ItemFlags,
}

impl Cell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the value stored under `role`.
    ///
    /// The edit role falls back to the display value when no edit value has
    /// been written.
    pub fn data(&self, role: Role) -> Option<&CellValue> {
        match role {
            Role::Display => self.display.as_ref(),
            Role::Edit => self.edit.as_ref().or(self.display.as_ref()),
        }
    }

    pub fn flags(&self) -> ItemFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ItemFlags) {
        self.flags = flags;
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_none() && self.edit.is_none()
    }

    pub(crate) fn store_display(&mut self, value: CellValue) {
        self.display = Some(value);
    }

    pub(crate) fn store_edit(&mut self, value: CellValue) {
        self.edit = Some(value);
    }
}
