//! Booking-to-night expansion.

use chrono::NaiveDate;

/// Whole nights between arrival and departure.
///
/// Zero when either date is missing or the span is not strictly positive;
/// a zero-night booking contributes no rows to the nightly ledger.
pub fn night_count(arrival: Option<NaiveDate>, departure: Option<NaiveDate>) -> u32 {
    match (arrival, departure) {
        (Some(arrival), Some(departure)) if departure > arrival => {
            (departure - arrival).num_days() as u32
        }
        _ => 0,
    }
}

/// Iterator over the stay nights of a booking: each date in the half-open
/// range [arrival, departure), one per night, in ascending order.
#[derive(Debug, Clone)]
pub struct StayNights {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

/// Lazily yields the nights of a stay; empty when `departure <= arrival`.
pub fn stay_nights(arrival: NaiveDate, departure: NaiveDate) -> StayNights {
    StayNights {
        next: (departure > arrival).then_some(arrival),
        end: departure,
    }
}

impl Iterator for StayNights {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.take()?;
        if let Some(following) = current.succ_opt()
            && following < self.end
        {
            self.next = Some(following);
        }
        Some(current)
    }
}
