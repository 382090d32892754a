//! Cell value coercion
//!
//! A coercion decides what an edit-role write actually stores. It is passed
//! to the grid's write operation as a parameter, so the same grid can be
//! written with strict numeric coercion during import and verbatim elsewhere.
//!
//! ## Strict numeric parse
//!
//! A value becomes a number only when the whole string is a float literal:
//! - `"12"` -> `12.0`
//! - `"12abc"`, `"3.5kg"`, `""`, `"   "` -> unchanged text
//! - `"42 "` -> unchanged text (trailing whitespace is never tolerated)
//! - `"42\0"` -> `42.0` only under [`TrailingTerminator::Nul`]

use crate::types::CellValue;
use serde::{Deserialize, Serialize};

/// Turns a written value into the value stored under the edit role.
pub trait Coerce {
    fn coerce(&self, value: CellValue) -> CellValue;
}

impl<F> Coerce for F
where
    F: Fn(CellValue) -> CellValue,
{
    fn coerce(&self, value: CellValue) -> CellValue {
        self(value)
    }
}

/// Stores every value as written.
#[derive(Clone, Copy, Debug, Default)]
pub struct Verbatim;

impl Coerce for Verbatim {
    fn coerce(&self, value: CellValue) -> CellValue {
        value
    }
}

/// Which characters may follow the numeric literal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailingTerminator {
    /// Nothing may follow the literal
    Reject,
    /// A single trailing NUL character is ignored
    #[default]
    Nul,
}

/// Tolerances applied around the numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericPolicy {
    pub trailing: TrailingTerminator,
    pub skip_leading_whitespace: bool,
}

impl Default for NumericPolicy {
    fn default() -> Self {
        Self {
            trailing: TrailingTerminator::Nul,
            skip_leading_whitespace: true,
        }
    }
}

impl NumericPolicy {
    /// Parse `s` as a float only if the literal spans the entire string.
    pub fn parse(&self, s: &str) -> Option<f64> {
        let body = match self.trailing {
            TrailingTerminator::Nul => s.strip_suffix('\0').unwrap_or(s),
            TrailingTerminator::Reject => s,
        };
        let body = if self.skip_leading_whitespace {
            body.trim_start_matches(is_c_space)
        } else {
            body
        };

        // f64's grammar already rejects empty input and surrounding garbage
        body.parse::<f64>().ok()
    }
}

/// The C locale's `isspace` set; other Unicode spaces are not skipped.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Coerces the text form of a value into a number when it parses in full.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrictNumeric {
    pub policy: NumericPolicy,
}

impl StrictNumeric {
    pub fn new(policy: NumericPolicy) -> Self {
        Self { policy }
    }
}

impl Coerce for StrictNumeric {
    fn coerce(&self, value: CellValue) -> CellValue {
        let parsed = match &value {
            CellValue::Text(s) => self.policy.parse(s),
            CellValue::Number(n) => self.policy.parse(&n.to_string()),
        };
        match parsed {
            Some(n) => CellValue::Number(n),
            None => value,
        }
    }
}
