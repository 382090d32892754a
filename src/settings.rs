//! Import settings
//!
//! Stored as JSON at `<config dir>/csvgrid/settings.json`. Missing fields take
//! their defaults, so an empty object is a valid settings file.

use crate::constants::{APP_DIR_NAME, DEFAULT_DELIMITER, SETTINGS_FILE_NAME};
use crate::data::NumericPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading or writing the settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// How delimited files are read and coerced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportSettings {
    /// Field separator
    pub delimiter: char,
    /// Treat the first record as column headers instead of a data row
    pub has_headers: bool,
    /// Stop after this many data rows
    pub max_rows: Option<usize>,
    /// Numeric coercion tolerances
    pub numeric: NumericPolicy,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            has_headers: false,
            max_rows: None,
            numeric: NumericPolicy::default(),
        }
    }
}

impl ImportSettings {
    /// Load from the default settings path, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// `<config dir>/csvgrid/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}
