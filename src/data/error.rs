//! Error types for data import
//!
//! Opening the source is the only recoverable failure of an import. A cell
//! that does not parse as a number is not an error: it keeps its text.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while importing a delimited file
#[derive(Error, Debug)]
pub enum ImportError {
    /// The file is missing or could not be opened
    #[error("missing data file {}: {source}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but a line could not be read
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    /// Whether the error means no data file was available at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ImportError::NotFound { .. })
    }
}

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;
