//! Terminal previews and the run summary.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use nightledger_cli::pipeline::SplitOutcome;
use nightledger_model::{CellValue, Table as DataTable};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
}

fn render_cell(cell: &CellValue) -> Cell {
    match cell {
        CellValue::Text(s) => Cell::new(s),
        // Integral numbers are serial dates or night counts; everything
        // else is money, shown to the cent.
        CellValue::Number(n) if n.fract() == 0.0 => {
            Cell::new(format!("{n:.0}")).set_alignment(CellAlignment::Right)
        }
        CellValue::Number(n) => Cell::new(format!("{n:.2}")).set_alignment(CellAlignment::Right),
        CellValue::Missing => Cell::new(""),
    }
}

/// Print the first `limit` rows of a table.
pub fn print_preview(title: &str, data: &DataTable, limit: usize) {
    let shown = limit.min(data.height());
    println!("{title} ({shown} of {} rows)", data.height());
    let mut preview = Table::new();
    apply_table_style(&mut preview);
    preview.set_header(data.columns.iter().map(|name| header_cell(name)));
    for row in data.rows.iter().take(limit) {
        preview.add_row(row.iter().map(render_cell));
    }
    println!("{preview}");
}

pub fn print_summary(outcome: &SplitOutcome) {
    println!("Bookings in: {}", outcome.stats.bookings);
    println!("Nightly rows out: {}", outcome.stats.nights);
    if outcome.stats.zero_night_bookings > 0 {
        println!(
            "Bookings dropped (no positive night span): {}",
            outcome.stats.zero_night_bookings
        );
    }
    match &outcome.workbook {
        Some(path) => println!("Workbook: {}", path.display()),
        None => println!("Workbook: not written (dry run)"),
    }
}
