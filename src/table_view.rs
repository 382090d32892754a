//! Plain-text table view over any [`ItemModel`].
//!
//! Features:
//! - Collapse/expand with row count badge
//! - Pagination (page jump + page size)
//! - Header row from the model's header labels, or column numbers
//!
//! The view only reads the model. It renders the display role, so edited
//! cells show exactly what was written.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let state = TableViewState::new(grid.row_count());
//! println!("{}", render_table("Category chart", &grid, &state));
//! ```

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_COLUMN_WIDTH};
use crate::grid::ItemModel;
use crate::types::Role;

/// Paging state for a table view instance
#[derive(Clone, Debug)]
pub struct TableViewState {
    /// Whether the table is collapsed (title-only view)
    pub collapsed: bool,
    /// Current page (0-indexed)
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Total number of rows
    pub total_rows: usize,
}

impl TableViewState {
    pub fn new(total_rows: usize) -> Self {
        Self {
            collapsed: false,
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total_rows,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.total_rows == 0 {
            1
        } else {
            self.total_rows.div_ceil(self.page_size)
        }
    }

    /// Jump to `page`, clamped to the last page.
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages().saturating_sub(1));
    }

    /// Change the page size; zero is ignored.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        // Reset to first page when changing page size
        self.current_page = 0;
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Get the range of rows to display for current page
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page * self.page_size).min(self.total_rows);
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }
}

/// Render the title line, and unless collapsed the header, visible rows and footer.
pub fn render_table(title: &str, model: &dyn ItemModel, state: &TableViewState) -> String {
    let mut lines = vec![format!("{} ({})", title, format_row_count(state.total_rows))];
    if state.collapsed {
        return lines.join("\n");
    }

    let columns = model.column_count();
    let headers: Vec<String> = (0..columns)
        .map(|col| {
            let label = model
                .header_data(col)
                .map(str::to_string)
                .unwrap_or_else(|| col.to_string());
            clip(label)
        })
        .collect();

    let range = state.visible_range();
    let body: Vec<Vec<String>> = range
        .clone()
        .map(|row| {
            (0..columns)
                .map(|col| {
                    let text = model
                        .data(row, col, Role::Display)
                        .map(|v| v.to_string())
                        .unwrap_or_default();
                    clip(text)
                })
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            body.iter()
                .map(|cells| cells[col].chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    lines.push(format_line(&headers, &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for cells in &body {
        lines.push(format_line(cells, &widths));
    }

    let showing_start = if range.is_empty() { 0 } else { range.start + 1 };
    lines.push(format!(
        "Showing {}-{} of {} · page {} / {}",
        showing_start,
        range.end,
        state.total_rows,
        state.current_page + 1,
        state.total_pages()
    ));

    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

/// Shorten text longer than [`MAX_COLUMN_WIDTH`] characters, ending it with `…`.
fn clip(text: String) -> String {
    if text.chars().count() <= MAX_COLUMN_WIDTH {
        return text;
    }
    let mut clipped: String = text.chars().take(MAX_COLUMN_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}

/// Format row count with a K/M suffix (e.g., "1.2K rows")
pub fn format_row_count(count: usize) -> String {
    let formatted = if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    };

    if count == 1 {
        format!("{} row", formatted)
    } else {
        format!("{} rows", formatted)
    }
}
