use std::fs;
use std::str::FromStr;

use chrono::DateTime;
use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use trade_fixtures::error::FixtureError;
use trade_fixtures::synth::Synthesizer;
use trade_fixtures::trade::HEADER;
use trade_fixtures::writer::generate;

fn generate_and_read(rows: u32) -> (StringRecord, Vec<StringRecord>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("large_trades.csv");
    let written = generate(&Synthesizer::default(), rows, &path).unwrap();
    assert_eq!(written, rows);

    let mut reader = ReaderBuilder::new().from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let records = reader.records().map(Result::unwrap).collect();
    (headers, records)
}

#[test]
fn test_header_and_row_count() {
    let (headers, records) = generate_and_read(3_000);
    assert_eq!(headers, StringRecord::from(HEADER.to_vec()));
    assert_eq!(records.len(), 3_000);
}

#[test]
fn test_empty_run_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    generate(&Synthesizer::default(), 0, &path).unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "symbol,side,entry_time,exit_time,entry_price,exit_price,qty,fees,notes\n"
    );
}

#[test]
fn test_trades_are_fully_open_or_fully_closed() {
    let (_, records) = generate_and_read(1_000);
    for (index, record) in records.iter().enumerate() {
        let exit_time = &record[3];
        let exit_price = &record[5];
        if index % 17 == 0 {
            assert_eq!(exit_time, "", "row {index}");
            assert_eq!(exit_price, "", "row {index}");
        } else {
            assert_ne!(exit_time, "", "row {index}");
            assert_ne!(exit_price, "", "row {index}");
        }
    }
}

#[test]
fn test_exit_time_after_entry_time() {
    let (_, records) = generate_and_read(1_000);
    for record in records.iter().filter(|record| !record[3].is_empty()) {
        let entry = DateTime::parse_from_rfc3339(&record[2]).unwrap();
        let exit = DateTime::parse_from_rfc3339(&record[3]).unwrap();
        assert!(entry < exit);
    }
}

#[test]
fn test_exit_price_floor() {
    let (_, records) = generate_and_read(1_000);
    let floor = Decimal::from_str("0.01").unwrap();
    for record in records.iter().filter(|record| !record[5].is_empty()) {
        assert!(Decimal::from_str(&record[5]).unwrap() >= floor);
    }
}

#[test]
fn test_numeric_fields_are_fixed_point() {
    let (_, records) = generate_and_read(500);
    for record in &records {
        for field in [&record[4], &record[7]] {
            let (_, fraction) = field.split_once('.').unwrap();
            assert_eq!(fraction.len(), 2, "{field}");
            assert!(!field.contains('e'));
        }
        assert!(["1", "2", "3", "5", "10"].contains(&&record[6]));
    }
}

#[test]
fn test_edge_case_rows() {
    let (_, records) = generate_and_read(200);
    assert_eq!(&records[123][2], "2024-03-10T06:59:59Z");
    assert_eq!(&records[0][2], "2024-01-01T09:30:00Z");
    assert_eq!(&records[50][2], "2024-01-01T09:55:00Z");
    assert_eq!(&records[100][2], "2024-01-01T10:20:00Z");
    assert_eq!(&records[150][2], "2024-01-01T10:45:00Z");
}

#[test]
fn test_output_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    generate(&Synthesizer::default(), 400, &first).unwrap();
    generate(&Synthesizer::default(), 400, &second).unwrap();
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.csv");
    generate(&Synthesizer::default(), 50, &path).unwrap();
    generate(&Synthesizer::default(), 3, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 4);
}

#[test]
fn test_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("trades.csv");
    let result = generate(&Synthesizer::default(), 10, &path);
    assert!(matches!(result, Err(FixtureError::IoError(_))));
    assert!(!path.exists());
}
