//! The reservation nightly split engine.
//!
//! Expands each booking row into one row per stay night, apportions the
//! monetary columns across nights so per-booking totals are preserved to
//! the cent, and converts dates to Excel serial day counts:
//!
//! - **dates**: day-first date parsing and Excel serial conversion
//! - **expand**: night counting and the stay-night iterator
//! - **money**: numeric coercion and remainder-corrected apportionment
//! - **engine**: the table-to-table transform tying it together

pub mod dates;
pub mod engine;
pub mod expand;
pub mod money;

pub use engine::{SplitRun, SplitStats, split_reservations, split_reservations_detailed};
