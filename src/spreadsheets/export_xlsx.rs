use crate::domain::ListingTable;
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

/// Render the aggregated table into an in-memory xlsx workbook. Cells
/// come from the same renderer as the CSV export, so the two artifacts
/// always agree.
pub fn table_to_xlsx(table: &ListingTable) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in ListingTable::header().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{header}': {e}"))
            })?;
    }

    for (i, rec) in table.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, cell) in table.row_values(rec).iter().enumerate() {
            worksheet.write_string(r, col as u16, cell).map_err(|e| {
                ServerError::XlsxError(format!("Failed to write row {r}: {e}"))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
