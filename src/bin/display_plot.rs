use std::path::PathBuf;

use color_eyre::eyre::WrapErr;
use lad_device::util::csv_table::{CsvTable, DEFAULT_CSV_FILE};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_FILE));

    let table = CsvTable::load(&path)
        .wrap_err_with(|| format!("Failed to open {}", path.display()))?;

    if table.is_empty() {
        tracing::warn!(path = %path.display(), "no rows found");
    }

    print!("{}", table.render());
    Ok(())
}
