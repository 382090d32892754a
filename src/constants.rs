//! Application-wide constants.

// ============================================================================
// Import Defaults
// ============================================================================

/// Field separator used when no settings override it
pub const DEFAULT_DELIMITER: char = ',';

/// Data file the demo binary loads when no path is given
pub const DEFAULT_DATA_FILE: &str = "data/category.csv";

// ============================================================================
// Settings
// ============================================================================

/// Directory under the platform config dir holding our files
pub const APP_DIR_NAME: &str = "csvgrid";

/// Settings file name inside [`APP_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";

// ============================================================================
// Table View
// ============================================================================

/// Rows per page when none is requested
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Widest a rendered column may get, in characters
pub const MAX_COLUMN_WIDTH: usize = 24;
