use crate::domain::ListingTable;
use crate::errors::ServerError;

/// Render the aggregated table as a UTF-8 CSV buffer with the same
/// header order and cell values as the xlsx export.
pub fn table_to_csv(table: &ListingTable) -> Result<Vec<u8>, ServerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(ListingTable::header())
        .map_err(|e| ServerError::CsvError(format!("Failed to write header: {e}")))?;

    for rec in &table.rows {
        writer
            .write_record(table.row_values(rec))
            .map_err(|e| ServerError::CsvError(format!("Failed to write row: {e}")))?;
    }

    writer
        .into_inner()
        .map_err(|e| ServerError::CsvError(format!("Failed to flush CSV buffer: {e}")))
}
