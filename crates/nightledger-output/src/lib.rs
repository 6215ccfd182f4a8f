//! Workbook output for the nightly split.
//!
//! Writes the untouched original table and the nightly ledger side by side
//! as a two-sheet xlsx workbook, mirroring what the upload tool hands back
//! to the user. Serial-date and money cells are written as numbers so they
//! stay usable in spreadsheet formulas.

use std::path::Path;

use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use nightledger_model::{CellValue, Table};

/// Sheet holding the pass-through copy of the uploaded table.
pub const ORIGINAL_SHEET: &str = "Original Data";
/// Sheet holding the nightly ledger.
pub const SPLIT_SHEET: &str = "Reservations Daily Split";

fn write_sheet(sheet: &mut Worksheet, table: &Table, header_format: &Format) -> Result<()> {
    for (col, header) in table.columns.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, header, header_format)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_number = row_idx as u32 + 1;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_number = col_idx as u16;
            match cell {
                CellValue::Text(s) => {
                    sheet.write_string(row_number, col_number, s)?;
                }
                CellValue::Number(n) => {
                    sheet.write_number(row_number, col_number, *n)?;
                }
                CellValue::Missing => {}
            }
        }
    }
    sheet.autofit();
    Ok(())
}

/// Write the original table and the nightly ledger as a two-sheet workbook.
pub fn write_split_workbook(original: &Table, nightly: &Table, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(ORIGINAL_SHEET)?;
    write_sheet(sheet, original, &header_format)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(SPLIT_SHEET)?;
    write_sheet(sheet, nightly, &header_format)?;

    workbook
        .save(path)
        .with_context(|| format!("save workbook: {}", path.display()))?;
    info!(
        path = %path.display(),
        original_rows = original.height(),
        nightly_rows = nightly.height(),
        "split workbook written"
    );
    Ok(())
}
