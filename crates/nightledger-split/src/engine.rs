//! The reservation-to-nightly-ledger transform.
//!
//! One pure pass over the input table: validate required columns, parse
//! dates day-first, expand each booking into its stay nights, apportion
//! monetary columns against the booking's own night count, and emit the
//! finalized column set in its fixed order.

use tracing::{debug, info, warn};

use nightledger_model::{
    APARTMENT, ARRIVAL, BOOKING_DATE, CHANNEL, DEPARTURE, GUEST_NAME, MONEY_COLUMNS, NIGHTS,
    REQUIRED_COLUMNS, RESERVATION_NUMBER, STAY_DATE, SUB_CHANNEL, CellValue, Result, SplitError,
    Table, normalize_label, output_columns, per_night_name,
};

use crate::dates::{cell_date, to_excel_serial};
use crate::expand::{night_count, stay_nights};
use crate::money::{apportion, coerce_money};

/// Counters describing one split run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitStats {
    /// Booking rows seen in the input.
    pub bookings: usize,
    /// Nightly rows emitted.
    pub nights: usize,
    /// Bookings dropped because no positive night span could be derived
    /// (bad dates, same-day or reversed stays).
    pub zero_night_bookings: usize,
}

/// A completed split: the nightly ledger plus run counters.
#[derive(Debug, Clone)]
pub struct SplitRun {
    pub table: Table,
    pub stats: SplitStats,
}

/// How one output column derives from the input row.
enum ColumnSource {
    /// Identifying field copied unchanged to every night.
    Copy(usize),
    /// Generated stay date as an Excel serial.
    StayDate,
    /// Booking date converted to an Excel serial.
    BookingDate,
    /// Constant night count of 1.
    NightsConstant,
    /// Monetary field apportioned across the stay.
    Money(usize),
}

struct PlannedColumn {
    name: String,
    source: ColumnSource,
}

fn required_positions(columns: &[String]) -> Result<(usize, usize, usize)> {
    let position = |name: &str| columns.iter().position(|c| c == name);
    let (Some(arrival), Some(departure), Some(booking_date), Some(_)) = (
        position(ARRIVAL),
        position(DEPARTURE),
        position(BOOKING_DATE),
        position(RESERVATION_NUMBER),
    ) else {
        let missing = REQUIRED_COLUMNS
            .iter()
            .filter(|name| position(name).is_none())
            .map(|name| (*name).to_string())
            .collect();
        return Err(SplitError::MissingColumns(missing));
    };
    Ok((arrival, departure, booking_date))
}

/// Resolve the output plan against the normalized input columns. Optional
/// columns absent from the input are simply left out of the plan.
fn plan_output(columns: &[String]) -> Vec<PlannedColumn> {
    let position = |name: &str| columns.iter().position(|c| c == name);
    let mut planned = Vec::new();
    for name in output_columns() {
        let source = match name.as_str() {
            STAY_DATE => Some(ColumnSource::StayDate),
            BOOKING_DATE => Some(ColumnSource::BookingDate),
            NIGHTS => Some(ColumnSource::NightsConstant),
            SUB_CHANNEL => position(CHANNEL).map(ColumnSource::Copy),
            RESERVATION_NUMBER | APARTMENT | GUEST_NAME => {
                position(&name).map(ColumnSource::Copy)
            }
            per_night => MONEY_COLUMNS
                .iter()
                .find(|money| per_night_name(money) == per_night)
                .and_then(|money| position(money))
                .map(ColumnSource::Money),
        };
        if let Some(source) = source {
            planned.push(PlannedColumn { name, source });
        }
    }
    planned
}

/// Expand a reservation table into the nightly ledger.
///
/// Pure with respect to the input: the caller's table is never mutated.
/// Fails only when required columns are missing; malformed dates and
/// money degrade per field instead.
pub fn split_reservations(input: &Table) -> Result<Table> {
    split_reservations_detailed(input).map(|run| run.table)
}

/// [`split_reservations`] plus run counters, for callers that surface a
/// summary (dropped zero-night bookings in particular).
pub fn split_reservations_detailed(input: &Table) -> Result<SplitRun> {
    let columns: Vec<String> = input.columns.iter().map(|c| normalize_label(c)).collect();
    let (arrival_idx, departure_idx, booking_idx) = required_positions(&columns)?;
    let planned = plan_output(&columns);

    let mut output = Table::new(planned.iter().map(|p| p.name.clone()).collect());
    let mut stats = SplitStats::default();

    for (row_number, row) in input.rows.iter().enumerate() {
        stats.bookings += 1;
        let arrival = row.get(arrival_idx).and_then(cell_date);
        let departure = row.get(departure_idx).and_then(cell_date);
        let nights = night_count(arrival, departure);
        if nights == 0 {
            stats.zero_night_bookings += 1;
            debug!(row = row_number + 1, "booking with no positive night span skipped");
            continue;
        }
        // nights > 0 implies both dates parsed
        let (Some(arrival), Some(departure)) = (arrival, departure) else {
            continue;
        };

        let booking_serial = row
            .get(booking_idx)
            .and_then(cell_date)
            .map(to_excel_serial);

        // Shares are computed once per booking from its own pre-expansion
        // night count, never from a recomputed group size; the last entry
        // carries the rounding remainder.
        let shares: Vec<Vec<f64>> = planned
            .iter()
            .map(|plan| match plan.source {
                ColumnSource::Money(source) => {
                    let total = row.get(source).map(coerce_money).unwrap_or(0.0);
                    apportion(total, nights)
                }
                _ => Vec::new(),
            })
            .collect();

        for (night_index, stay_date) in stay_nights(arrival, departure).enumerate() {
            let mut nightly_row = Vec::with_capacity(planned.len());
            for (column_index, plan) in planned.iter().enumerate() {
                let cell = match plan.source {
                    ColumnSource::Copy(source) => {
                        row.get(source).cloned().unwrap_or(CellValue::Missing)
                    }
                    ColumnSource::StayDate => {
                        CellValue::Number(to_excel_serial(stay_date) as f64)
                    }
                    ColumnSource::BookingDate => match booking_serial {
                        Some(serial) => CellValue::Number(serial as f64),
                        None => CellValue::Missing,
                    },
                    ColumnSource::NightsConstant => CellValue::Number(1.0),
                    ColumnSource::Money(_) => CellValue::Number(
                        shares[column_index].get(night_index).copied().unwrap_or(0.0),
                    ),
                };
                nightly_row.push(cell);
            }
            output.push_row(nightly_row);
            stats.nights += 1;
        }
    }

    if stats.zero_night_bookings > 0 {
        warn!(
            count = stats.zero_night_bookings,
            "bookings without a positive night span were dropped from the nightly ledger"
        );
    }
    info!(
        bookings = stats.bookings,
        nights = stats.nights,
        "reservations expanded into nightly rows"
    );
    Ok(SplitRun {
        table: output,
        stats,
    })
}
