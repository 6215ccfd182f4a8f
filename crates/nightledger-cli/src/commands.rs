use anyhow::Result;
use comfy_table::{Cell, Table};

use nightledger_cli::pipeline::{SplitOutcome, run_split_pipeline};
use nightledger_model::{
    APARTMENT, ARRIVAL, BOOKING_DATE, CHANNEL, DEPARTURE, GUEST_NAME, MONEY_COLUMNS,
    RESERVATION_NUMBER, STAY_DATE, SUB_CHANNEL, per_night_name,
};

use crate::cli::SplitArgs;
use crate::summary::{apply_table_style, print_preview};

pub fn run_split(args: &SplitArgs) -> Result<SplitOutcome> {
    let outcome = run_split_pipeline(&args.input, args.output.as_deref(), args.dry_run)?;
    if args.preview > 0 {
        print_preview("Input preview", &outcome.original, args.preview);
        print_preview("Daily split preview", &outcome.nightly, args.preview);
    }
    Ok(outcome)
}

pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Input column", "Required", "Output"]);
    apply_table_style(&mut table);
    table.add_row(vec![RESERVATION_NUMBER, "yes", RESERVATION_NUMBER]);
    table.add_row(vec![ARRIVAL, "yes", "(expanded into the Date column)"]);
    table.add_row(vec![DEPARTURE, "yes", "(expanded into the Date column)"]);
    table.add_row(vec![
        BOOKING_DATE,
        "yes",
        "Booking Date (Excel serial value)",
    ]);
    table.add_row(vec![APARTMENT, "no", APARTMENT]);
    table.add_row(vec![GUEST_NAME, "no", GUEST_NAME]);
    table.add_row(vec![CHANNEL, "no", SUB_CHANNEL]);
    for money in MONEY_COLUMNS {
        table.add_row(vec![
            Cell::new(money),
            Cell::new("no"),
            Cell::new(per_night_name(money)),
        ]);
    }
    println!("{table}");
    println!("Generated columns: {STAY_DATE} (Excel serial stay date), Nights (always 1)");
    Ok(())
}
