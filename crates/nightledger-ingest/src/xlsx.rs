use std::path::Path;

use anyhow::{Context, Result};
use calamine::{Data, Reader, Xlsx, open_workbook};
use tracing::debug;

use nightledger_model::{CellValue, Table, normalize_label};

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::String(s) => {
            let trimmed = s.trim().trim_matches('\u{feff}');
            if trimmed.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(trimmed.to_string())
            }
        }
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Number(f64::from(*b)),
        // Date cells arrive as Excel serials, which is the representation
        // the split wants anyway.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

fn header_label(data: &Data) -> String {
    match data {
        Data::String(s) => normalize_label(s),
        Data::Empty => String::new(),
        other => normalize_label(&other.to_string()),
    }
}

/// Read the first worksheet of an xlsx workbook into a [`Table`].
///
/// The first non-empty row is taken as the header row. Data rows are padded
/// to the header width; fully empty rows are skipped.
pub fn read_xlsx_table(path: &Path) -> Result<Table> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).with_context(|| format!("open workbook: {}", path.display()))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .with_context(|| format!("workbook has no sheets: {}", path.display()))?
        .clone();
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("read sheet {sheet_name:?}: {}", path.display()))?;

    let mut rows = range
        .rows()
        .skip_while(|row| row.iter().all(|cell| cell_value(cell).is_missing()));
    let Some(header_row) = rows.next() else {
        return Ok(Table::new(Vec::new()));
    };
    let headers: Vec<String> = header_row.iter().map(header_label).collect();

    let mut table = Table::new(headers);
    for record in rows {
        let row: Vec<CellValue> = record.iter().map(cell_value).collect();
        if row.iter().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        sheet = %sheet_name,
        columns = table.width(),
        rows = table.height(),
        "xlsx table loaded"
    );
    Ok(table)
}
