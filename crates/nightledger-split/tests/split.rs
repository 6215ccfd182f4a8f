//! End-to-end tests for the nightly split engine.

use nightledger_model::{CellValue, SplitError, Table};
use nightledger_split::{split_reservations, split_reservations_detailed};

fn text_table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| (*c).to_string()).collect());
    for row in rows {
        table.push_row(
            row.iter()
                .map(|value| {
                    if value.is_empty() {
                        CellValue::Missing
                    } else {
                        CellValue::Text((*value).to_string())
                    }
                })
                .collect(),
        );
    }
    table
}

fn numbers(table: &Table, column: &str) -> Vec<f64> {
    let idx = table.column_index(column).expect("column present");
    table
        .rows
        .iter()
        .map(|row| match &row[idx] {
            CellValue::Number(n) => *n,
            other => panic!("expected number in {column}, got {other:?}"),
        })
        .collect()
}

#[test]
fn three_night_booking_expands_to_three_rows() {
    let input = text_table(
        &["Reservation Number", "Arrival", "Departure", "Booking Date"],
        &[&["R-1", "01/01/2024", "04/01/2024", "20/12/2023"]],
    );
    let output = split_reservations(&input).expect("split");

    assert_eq!(output.height(), 3);
    assert_eq!(numbers(&output, "Date"), vec![45292.0, 45293.0, 45294.0]);
    assert_eq!(numbers(&output, "Booking Date"), vec![45280.0; 3]);
    assert_eq!(numbers(&output, "Nights"), vec![1.0, 1.0, 1.0]);
}

#[test]
fn remainder_goes_to_the_last_night() {
    let input = text_table(
        &[
            "Reservation Number",
            "Arrival",
            "Departure",
            "Booking Date",
            "Total Revenue",
        ],
        &[&["R-1", "01/01/2024", "04/01/2024", "20/12/2023", "100"]],
    );
    let output = split_reservations(&input).expect("split");

    assert_eq!(
        numbers(&output, "Total Revenue per Night"),
        vec![33.33, 33.33, 33.34]
    );
}

#[test]
fn per_booking_totals_are_conserved() {
    let input = text_table(
        &[
            "Reservation Number",
            "Arrival",
            "Departure",
            "Booking Date",
            "Total Revenue",
            "Cleaning Fees",
        ],
        &[
            &["R-1", "01/01/2024", "08/01/2024", "20/12/2023", "1234.56", "95.00"],
            &["R-2", "05/01/2024", "06/01/2024", "21/12/2023", "99.99", "0.05"],
            &["R-3", "10/01/2024", "13/01/2024", "22/12/2023", "250.10", "33.33"],
        ],
    );
    let output = split_reservations(&input).expect("split");

    let reservation = output.column_index("Reservation Number").unwrap();
    for (id, expected_revenue, expected_cleaning) in
        [("R-1", 123456i64, 9500i64), ("R-2", 9999, 5), ("R-3", 25010, 3333)]
    {
        let mut revenue = 0i64;
        let mut cleaning = 0i64;
        for (row_idx, row) in output.rows.iter().enumerate() {
            if row[reservation].as_str() != Some(id) {
                continue;
            }
            let value = |column: &str| {
                output.cell(row_idx, column).and_then(CellValue::numeric_value).unwrap()
            };
            revenue += (value("Total Revenue per Night") * 100.0).round() as i64;
            cleaning += (value("Cleaning Fees per Night") * 100.0).round() as i64;
        }
        assert_eq!(revenue, expected_revenue, "revenue conserved for {id}");
        assert_eq!(cleaning, expected_cleaning, "cleaning conserved for {id}");
    }
}

#[test]
fn zero_and_negative_spans_drop_the_booking() {
    let input = text_table(
        &["Reservation Number", "Arrival", "Departure", "Booking Date"],
        &[
            &["R-1", "05/01/2024", "05/01/2024", "01/01/2024"],
            &["R-2", "05/01/2024", "03/01/2024", "01/01/2024"],
            &["R-3", "05/01/2024", "06/01/2024", "01/01/2024"],
        ],
    );
    let run = split_reservations_detailed(&input).expect("split");

    assert_eq!(run.table.height(), 1);
    assert_eq!(run.stats.bookings, 3);
    assert_eq!(run.stats.nights, 1);
    assert_eq!(run.stats.zero_night_bookings, 2);
}

#[test]
fn unparseable_dates_degrade_to_dropped_bookings() {
    let input = text_table(
        &["Reservation Number", "Arrival", "Departure", "Booking Date"],
        &[&["R-1", "soon", "04/01/2024", "20/12/2023"]],
    );
    let run = split_reservations_detailed(&input).expect("split");

    assert_eq!(run.table.height(), 0);
    assert_eq!(run.stats.zero_night_bookings, 1);
}

#[test]
fn bad_booking_date_still_splits_the_stay() {
    let input = text_table(
        &["Reservation Number", "Arrival", "Departure", "Booking Date"],
        &[&["R-1", "01/01/2024", "03/01/2024", "whenever"]],
    );
    let output = split_reservations(&input).expect("split");

    assert_eq!(output.height(), 2);
    assert_eq!(output.cell(0, "Booking Date"), Some(&CellValue::Missing));
}

#[test]
fn missing_required_column_is_fatal() {
    let input = text_table(
        &["Reservation Number", "Arrival", "Booking Date"],
        &[&["R-1", "01/01/2024", "20/12/2023"]],
    );
    let error = split_reservations(&input).expect_err("must fail");
    match error {
        SplitError::MissingColumns(missing) => {
            assert_eq!(missing, vec!["Departure".to_string()]);
        }
        other => panic!("expected MissingColumns, got {other:?}"),
    }
}

#[test]
fn missing_optional_column_is_not_an_error() {
    let input = text_table(
        &["Reservation Number", "Arrival", "Departure", "Booking Date"],
        &[&["R-1", "01/01/2024", "02/01/2024", "20/12/2023"]],
    );
    let output = split_reservations(&input).expect("split");

    assert!(!output.has_column("Cleaning Fees per Night"));
    assert!(!output.has_column("Apartment"));
}

#[test]
fn irregular_header_whitespace_still_matches() {
    let input = text_table(
        &[
            " Reservation  Number ",
            "Arrival",
            "\u{feff}Departure",
            "Booking\tDate",
        ],
        &[&["R-1", "01/01/2024", "02/01/2024", "20/12/2023"]],
    );
    let output = split_reservations(&input).expect("split");
    assert_eq!(output.height(), 1);
    assert!(output.has_column("Reservation Number"));
}

#[test]
fn channel_is_renamed_and_stay_dates_replace_arrival_departure() {
    let input = text_table(
        &[
            "Reservation Number",
            "Apartment",
            "Guest Name",
            "Channel",
            "Arrival",
            "Departure",
            "Booking Date",
            "Total Revenue",
        ],
        &[&[
            "R-1",
            "Apt 4B",
            "A. Guest",
            "Direct",
            "01/01/2024",
            "03/01/2024",
            "20/12/2023",
            "200",
        ]],
    );
    let output = split_reservations(&input).expect("split");

    assert_eq!(
        output.columns,
        vec![
            "Reservation Number",
            "Apartment",
            "Guest Name",
            "Sub Channel",
            "Date",
            "Booking Date",
            "Nights",
            "Total Revenue per Night",
        ]
    );
    assert_eq!(
        output.cell(0, "Sub Channel"),
        Some(&CellValue::Text("Direct".to_string()))
    );
    assert_eq!(
        output.cell(1, "Apartment"),
        Some(&CellValue::Text("Apt 4B".to_string()))
    );
}

#[test]
fn serial_date_cells_are_accepted() {
    // xlsx ingest delivers date cells as Excel serial numbers.
    let mut input = Table::new(
        ["Reservation Number", "Arrival", "Departure", "Booking Date"]
            .iter()
            .map(|c| (*c).to_string())
            .collect(),
    );
    input.push_row(vec![
        CellValue::Text("R-1".to_string()),
        CellValue::Number(45292.0),
        CellValue::Number(45294.0),
        CellValue::Number(45280.0),
    ]);
    let output = split_reservations(&input).expect("split");

    assert_eq!(output.height(), 2);
    assert_eq!(numbers(&output, "Date"), vec![45292.0, 45293.0]);
    assert_eq!(numbers(&output, "Booking Date"), vec![45280.0, 45280.0]);
}

#[test]
fn non_numeric_money_becomes_zero() {
    let input = text_table(
        &[
            "Reservation Number",
            "Arrival",
            "Departure",
            "Booking Date",
            "Base Revenue",
        ],
        &[&["R-1", "01/01/2024", "03/01/2024", "20/12/2023", "TBD"]],
    );
    let output = split_reservations(&input).expect("split");
    assert_eq!(numbers(&output, "Base Revenue per Night"), vec![0.0, 0.0]);
}

#[test]
fn input_table_is_never_mutated() {
    let input = text_table(
        &["Reservation Number", "Arrival ", "Departure", "Booking Date"],
        &[&["R-1", "01/01/2024", "03/01/2024", "20/12/2023"]],
    );
    let before = input.clone();
    let _ = split_reservations(&input).expect("split");
    assert_eq!(input, before);
}
