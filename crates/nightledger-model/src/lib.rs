pub mod columns;
pub mod error;
pub mod table;

pub use columns::{
    APARTMENT, ARRIVAL, BOOKING_DATE, CHANNEL, DEPARTURE, GUEST_NAME, MONEY_COLUMNS, NIGHTS,
    REQUIRED_COLUMNS, RESERVATION_NUMBER, STAY_DATE, SUB_CHANNEL, normalize_label, output_columns,
    per_night_name,
};
pub use error::{Result, SplitError};
pub use table::{CellValue, Table};
