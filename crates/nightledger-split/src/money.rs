//! Monetary coercion and per-night apportionment.

use nightledger_model::CellValue;

/// Coerce a monetary cell to f64. Non-numeric text and missing cells count
/// as zero; a bad money field degrades the value, never the run.
pub fn coerce_money(cell: &CellValue) -> f64 {
    cell.numeric_value().unwrap_or(0.0)
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Split `total` across `nights` so the shares sum back to the rounded
/// total exactly.
///
/// Every night receives the rounded even share; the final night absorbs
/// the rounding remainder. Computed in integer cents: plain per-night
/// rounding drifts from the source total whenever it does not divide
/// evenly by the night count.
pub fn apportion(total: f64, nights: u32) -> Vec<f64> {
    if nights == 0 {
        return Vec::new();
    }
    let total_cents = (total * 100.0).round() as i64;
    let share_cents = ((total / f64::from(nights)) * 100.0).round() as i64;
    let last_cents = total_cents - share_cents * (i64::from(nights) - 1);

    let mut shares = vec![share_cents as f64 / 100.0; nights as usize];
    if let Some(last) = shares.last_mut() {
        *last = last_cents as f64 / 100.0;
    }
    shares
}
