//! Tabular import
//!
//! This module turns delimited text files into a [`Grid`](crate::grid::Grid)
//! of role-tagged cells.
//!
//! ## Coercion
//!
//! Every field is written under the edit role. The edit value becomes a
//! number only when the whole field is a float literal (see [`StrictNumeric`]);
//! otherwise it keeps the original text. The display value is always the
//! field as written.
//!
//! ## Error Handling
//!
//! Import operations return `ImportResult<T>` which uses the `ImportError` type:
//! - `NotFound`: the file is missing or could not be opened
//! - `Read`: a line could not be read after opening

mod coerce;
mod error;
mod import;
mod records;

pub use coerce::*;
pub use error::*;
pub use import::*;
pub use records::*;
