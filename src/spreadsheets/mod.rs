pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::table_to_csv;
pub use export_xlsx::table_to_xlsx;

pub fn xlsx_filename(city: &str, sigungu: &str) -> String {
    format!("{city}_{sigungu}_apartments.xlsx")
}

pub fn csv_filename(city: &str, sigungu: &str) -> String {
    format!("{city}_{sigungu}_apartments.csv")
}
