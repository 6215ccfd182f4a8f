//! Reservation export ingestion.
//!
//! Reads an uploaded export into the rectangular [`Table`] model:
//!
//! - **xlsx**: first worksheet of a workbook via calamine
//! - **csv**: headers plus string cells via the csv crate
//!
//! Column labels are normalized on the way in (trim, BOM strip, whitespace
//! collapse) so downstream column matching never trips over messy headers.

use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Result, bail};

use nightledger_model::Table;

pub mod csv_table;
pub mod xlsx;

pub use csv_table::read_csv_table;
pub use xlsx::read_xlsx_table;

/// Read a reservation export, dispatching on the file extension.
pub fn read_table(path: &Path) -> Result<Table> {
    let extension = path
        .extension()
        .and_then(OsStr::to_str)
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("xlsx") | Some("xlsm") => read_xlsx_table(path),
        Some("csv") => read_csv_table(path),
        _ => bail!(
            "unsupported input format: {} (expected .xlsx, .xlsm or .csv)",
            path.display()
        ),
    }
}
