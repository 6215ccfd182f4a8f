use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use nightledger_model::{CellValue, Table, normalize_label};

fn cell_from_field(raw: &str) -> CellValue {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(trimmed.to_string())
    }
}

/// Read a CSV export into a [`Table`].
///
/// The first record is the header row; labels are normalized. Data rows are
/// padded or truncated to the header width, and fully empty rows are
/// skipped. Cells stay textual; numeric coercion happens downstream.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("read csv headers: {}", path.display()))?
        .iter()
        .map(normalize_label)
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.with_context(|| format!("read csv record: {}", path.display()))?;
        let row: Vec<CellValue> = record.iter().map(cell_from_field).collect();
        if row.iter().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.width(),
        rows = table.height(),
        "csv table loaded"
    );
    Ok(table)
}
