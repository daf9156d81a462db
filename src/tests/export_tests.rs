// tests/export_tests.rs
use crate::domain::ListingTable;
use crate::spreadsheets::{csv_filename, table_to_csv, table_to_xlsx, xlsx_filename};
use crate::tests::utils::sample_table;

#[test]
fn csv_round_trips_to_the_in_memory_table() {
    let table = sample_table();
    let buffer = table_to_csv(&table).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());

    let headers = reader.headers().unwrap().clone();
    let expected = ListingTable::header();
    assert_eq!(headers.len(), expected.len());
    for (got, want) in headers.iter().zip(&expected) {
        assert_eq!(got, *want);
    }

    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), table.len());

    for (record, rec) in records.iter().zip(&table.rows) {
        let cells = table.row_values(rec);
        assert_eq!(record.len(), cells.len());
        for (got, want) in record.iter().zip(&cells) {
            assert_eq!(got, want.as_str());
        }
    }
}

#[test]
fn csv_applies_the_sentinel_policy() {
    let table = sample_table();
    let buffer = table_to_csv(&table).unwrap();
    let mut reader = csv::Reader::from_reader(buffer.as_slice());

    // second row is the all-absent record
    let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    let row = &records[1];
    let header = ListingTable::header();
    let col = |name: &str| header.iter().position(|h| *h == name).unwrap();

    assert_eq!(&row[col("complexName")], "Unknown");
    assert_eq!(&row[col("매물명")], "Unknown");
    assert_eq!(&row[col("매매가")], "Unknown");
    assert_eq!(&row[col("면적")], "");
    assert_eq!(&row[col("세대수")], "");
    assert_eq!(&row[col("이미지")], "No image");
    assert_eq!(&row[col("코멘트")], "No comment");
    assert_eq!(&row[col("si_do_name")], "Seoul");
    assert_eq!(&row[col("sigungu_name")], "Gangnam");
}

#[test]
fn xlsx_buffer_is_a_zip_with_the_same_row_count_source() {
    let table = sample_table();
    let buffer = table_to_xlsx(&table).unwrap();

    // xlsx is a ZIP container
    assert!(buffer.len() > 4);
    assert_eq!(&buffer[..4], b"PK\x03\x04");

    // both artifacts render from the same table
    let csv_buffer = table_to_csv(&table).unwrap();
    let csv_rows = csv_buffer.iter().filter(|b| **b == b'\n').count();
    assert_eq!(csv_rows, table.len() + 1); // header + data rows
}

#[test]
fn export_filenames_follow_the_region() {
    assert_eq!(
        xlsx_filename("서울특별시", "강남구"),
        "서울특별시_강남구_apartments.xlsx"
    );
    assert_eq!(
        csv_filename("서울특별시", "강남구"),
        "서울특별시_강남구_apartments.csv"
    );
}

#[test]
fn empty_table_exports_header_only() {
    let table = ListingTable::new("Seoul", "Gangnam");
    let buffer = table_to_csv(&table).unwrap();

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    assert_eq!(reader.headers().unwrap().len(), ListingTable::header().len());
    assert_eq!(reader.records().count(), 0);
}
