//! Day-first date parsing and Excel serial conversion.
//!
//! Reservation exports come from a region where `01/02/2024` means the 1st
//! of February, so ambiguous numeric dates are resolved day-first. Output
//! dates use the Excel 1900 serial system (DATEVALUE-style) for downstream
//! spreadsheet compatibility.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use nightledger_model::CellValue;

/// Day zero of the Excel 1900 date system: serial 1 is 1899-12-31 and
/// serial 45292 is 2024-01-01. Anchoring at 1899-12-30 reproduces the
/// system's historical 1900 leap-year quirk for every date after
/// 1900-02-28, which covers the entire practical input range.
pub fn excel_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("epoch is a valid date")
}

/// Whole days since the Excel epoch.
pub fn to_excel_serial(date: NaiveDate) -> i64 {
    (date - excel_epoch()).num_days()
}

/// Date for an Excel serial day count, if it is in range.
pub fn from_excel_serial(serial: i64) -> Option<NaiveDate> {
    let offset = TimeDelta::try_days(serial)?;
    excel_epoch().checked_add_signed(offset)
}

// Day-first variants come before month-first so ambiguous DD/MM strings
// resolve day-first; the US format only matches when day-first cannot.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d/%m/%y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y", // 15-Jan-2024
    "%d %b %Y", // 15 Jan 2024
    "%d %B %Y", // 15 January 2024
    "%m/%d/%Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date string with day-first preference.
///
/// Returns `None` for empty or unparseable input; callers degrade to a
/// missing date rather than failing the run.
pub fn parse_dayfirst(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
    }
    None
}

/// Date view of a cell: text is parsed day-first, numbers are treated as
/// Excel serials (how xlsx date cells arrive from ingest).
pub fn cell_date(cell: &CellValue) -> Option<NaiveDate> {
    match cell {
        CellValue::Text(s) => parse_dayfirst(s),
        CellValue::Number(n) if *n > 0.0 => from_excel_serial(n.trunc() as i64),
        _ => None,
    }
}
