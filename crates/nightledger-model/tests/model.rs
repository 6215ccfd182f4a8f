use nightledger_model::{CellValue, Table};

#[test]
fn push_row_keeps_table_rectangular() {
    let mut table = Table::new(vec!["A".to_string(), "B".to_string(), "C".to_string()]);
    table.push_row(vec![CellValue::Text("x".to_string())]);
    table.push_row(vec![
        CellValue::Number(1.0),
        CellValue::Number(2.0),
        CellValue::Number(3.0),
        CellValue::Number(4.0),
    ]);

    assert_eq!(table.height(), 2);
    assert_eq!(table.rows[0].len(), 3);
    assert_eq!(table.rows[0][1], CellValue::Missing);
    assert_eq!(table.rows[1].len(), 3);
    assert_eq!(table.rows[1][2], CellValue::Number(3.0));
}

#[test]
fn cell_lookup_by_column_name() {
    let mut table = Table::new(vec!["Guest Name".to_string(), "Nights".to_string()]);
    table.push_row(vec![
        CellValue::Text("A. Guest".to_string()),
        CellValue::Number(1.0),
    ]);

    assert_eq!(
        table.cell(0, "Guest Name").and_then(CellValue::as_str),
        Some("A. Guest")
    );
    assert_eq!(table.cell(0, "Nights"), Some(&CellValue::Number(1.0)));
    assert_eq!(table.cell(0, "No Such"), None);
    assert_eq!(table.cell(1, "Nights"), None);
}

#[test]
fn numeric_value_coerces_text() {
    assert_eq!(CellValue::Number(2.5).numeric_value(), Some(2.5));
    assert_eq!(CellValue::Text(" 10.25 ".to_string()).numeric_value(), Some(10.25));
    assert_eq!(CellValue::Text("n/a".to_string()).numeric_value(), None);
    assert_eq!(CellValue::Missing.numeric_value(), None);
}

#[test]
fn table_serializes() {
    let mut table = Table::new(vec!["A".to_string()]);
    table.push_row(vec![CellValue::Text("x".to_string())]);
    table.push_row(vec![CellValue::Missing]);

    let json = serde_json::to_string(&table).expect("serialize table");
    let round: Table = serde_json::from_str(&json).expect("deserialize table");
    assert_eq!(round, table);
}
