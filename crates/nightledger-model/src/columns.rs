//! Column vocabulary for reservation exports and the nightly ledger.
//!
//! Input column names follow the property-management export this tool was
//! built around. Only four columns are required; every other recognized
//! column is carried through when present and silently skipped when absent.

pub const RESERVATION_NUMBER: &str = "Reservation Number";
pub const APARTMENT: &str = "Apartment";
pub const GUEST_NAME: &str = "Guest Name";
pub const CHANNEL: &str = "Channel";
pub const ARRIVAL: &str = "Arrival";
pub const DEPARTURE: &str = "Departure";
pub const BOOKING_DATE: &str = "Booking Date";

/// Output name for the channel column.
pub const SUB_CHANNEL: &str = "Sub Channel";
/// Output column holding the per-night stay date as an Excel serial.
pub const STAY_DATE: &str = "Date";
/// Output column holding the constant night count of 1.
pub const NIGHTS: &str = "Nights";

/// Columns that must be present (after label normalization) for the split
/// to run at all.
pub const REQUIRED_COLUMNS: [&str; 4] = [RESERVATION_NUMBER, ARRIVAL, DEPARTURE, BOOKING_DATE];

/// Monetary columns apportioned across nights, in output order.
pub const MONEY_COLUMNS: [&str; 10] = [
    "Base Revenue",
    "Total Revenue",
    "Room Revenue",
    "SC on Room Revenue",
    "VAT on Room Rev",
    "VAT on SC",
    "Cleaning Fees Without VAT",
    "VAT on Cleaning Fees",
    "Tourism Dirham Fees",
    "Cleaning Fees",
];

/// Output name of an apportioned monetary column.
pub fn per_night_name(column: &str) -> String {
    format!("{column} per Night")
}

/// The fixed output column order: identifying fields, dates, night count,
/// then the per-night monetary columns. Callers filter by input presence.
pub fn output_columns() -> Vec<String> {
    let mut columns = vec![
        RESERVATION_NUMBER.to_string(),
        APARTMENT.to_string(),
        GUEST_NAME.to_string(),
        SUB_CHANNEL.to_string(),
        STAY_DATE.to_string(),
        BOOKING_DATE.to_string(),
        NIGHTS.to_string(),
    ];
    columns.extend(MONEY_COLUMNS.iter().map(|c| per_night_name(c)));
    columns
}

/// Normalize a column label: strip a leading BOM, trim, and collapse
/// internal whitespace runs to single spaces. Idempotent.
pub fn normalize_label(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    for part in trimmed.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(part);
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_normalization_collapses_whitespace() {
        assert_eq!(normalize_label("  Reservation   Number  "), "Reservation Number");
        assert_eq!(normalize_label("\u{feff}Arrival"), "Arrival");
        assert_eq!(normalize_label("Booking\tDate"), "Booking Date");
    }

    #[test]
    fn label_normalization_is_idempotent() {
        let once = normalize_label(" VAT  on   SC ");
        assert_eq!(normalize_label(&once), once);
    }

    #[test]
    fn output_order_starts_with_identifiers() {
        let columns = output_columns();
        assert_eq!(columns[0], RESERVATION_NUMBER);
        assert_eq!(columns[4], STAY_DATE);
        assert_eq!(columns[6], NIGHTS);
        assert_eq!(columns[7], "Base Revenue per Night");
        assert_eq!(columns.len(), 7 + MONEY_COLUMNS.len());
    }
}
