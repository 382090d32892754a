use anyhow::{Context, Result, bail};
use clap::Parser;
use csvgrid::constants::DEFAULT_DATA_FILE;
use csvgrid::data::{CsvImporter, ImportError};
use csvgrid::grid::ItemModel;
use csvgrid::logging;
use csvgrid::settings::ImportSettings;
use csvgrid::table_view::{TableViewState, render_table};
use csvgrid::types::{CellValue, Role};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "csvgrid")]
#[command(about = "Load a CSV file into an editable grid and print it as a table", long_about = None)]
struct Cli {
    /// Path to the delimited data file
    #[arg(default_value = DEFAULT_DATA_FILE)]
    path: PathBuf,

    /// Treat the first record as column headers (overrides settings)
    #[arg(long, overrides_with = "no_headers")]
    headers: bool,

    /// Treat the first record as data (overrides settings)
    #[arg(long, overrides_with = "headers")]
    no_headers: bool,

    /// Field separator (overrides settings)
    #[arg(long)]
    delimiter: Option<char>,

    /// Page to show (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Print only the title and row count
    #[arg(long)]
    collapsed: bool,

    /// Edit a cell before printing, as ROW:COL=VALUE (zero-based)
    #[arg(long = "set", value_name = "ROW:COL=VALUE")]
    edits: Vec<String>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded settings.
    fn apply_to(&self, settings: &mut ImportSettings) {
        if self.headers {
            settings.has_headers = true;
        } else if self.no_headers {
            settings.has_headers = false;
        }
        if let Some(delimiter) = self.delimiter {
            settings.delimiter = delimiter;
        }
    }

    /// Paging state for a model with `rows` rows.
    fn view_state(&self, rows: usize) -> TableViewState {
        let mut state = TableViewState::new(rows);
        if let Some(size) = self.page_size {
            state.set_page_size(size);
        }
        state.go_to(self.page.saturating_sub(1));
        if self.collapsed {
            state.toggle_collapsed();
        }
        state
    }
}

/// Parse `ROW:COL=VALUE`.
fn parse_edit(arg: &str) -> Result<(usize, usize, String)> {
    let (pos, value) = arg
        .split_once('=')
        .with_context(|| format!("edit {:?} is missing '='", arg))?;
    let (row, col) = pos
        .split_once(':')
        .with_context(|| format!("edit {:?} is missing ROW:COL", arg))?;
    let row: usize = row.trim().parse().context("invalid row")?;
    let col: usize = col.trim().parse().context("invalid column")?;
    Ok((row, col, value.to_string()))
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut settings = ImportSettings::load();
    cli.apply_to(&mut settings);

    let mut store = match CsvImporter::new(settings).load(&cli.path) {
        Ok(store) => store,
        Err(e @ ImportError::NotFound { .. }) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("import failed"),
    };

    for edit in &cli.edits {
        let (row, col, value) = parse_edit(edit)?;
        if !store.set_data(row, col, Role::Edit, CellValue::Text(value)) {
            bail!("cell {}:{} does not exist or is not editable", row, col);
        }
        match store.view().data(row, col, Role::Edit) {
            Some(CellValue::Number(n)) => tracing::info!(row, col, value = n, "Stored number"),
            Some(CellValue::Text(s)) => tracing::info!(row, col, value = %s, "Stored text"),
            None => {}
        }
    }

    let grid = store.view();
    let state = cli.view_state(grid.row_count());

    let title = cli
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Data");
    println!("{}", render_table(title, grid, &state));

    Ok(())
}
