//! Spreadsheet serialization of a projection.

use crate::core::project::{Cell, Projection};
use anyhow::{Context, Result};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, XlsxError};
use std::path::Path;

/// Fixed output filename; an existing file is silently overwritten.
pub const EXPORT_FILENAME: &str = "kurs-pajak.xlsx";

fn build_workbook(projection: &Projection) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();

    // Pin the document creation time so identical projections serialize to
    // byte-identical files.
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    workbook.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let worksheet = workbook.add_worksheet();
    for (col, header) in projection.header.iter().enumerate() {
        worksheet.write_string(0, col as u16, header)?;
    }
    for (row_idx, row) in projection.rows.iter().enumerate() {
        let row_num = (row_idx + 1) as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col, text)?;
                }
                Cell::Number(number) => {
                    worksheet.write_number(row_num, col, *number)?;
                }
                Cell::Missing => {}
            }
        }
    }
    Ok(workbook)
}

/// Serializes the projection into workbook bytes.
pub fn to_buffer(projection: &Projection) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(projection).context("Failed to build workbook")?;
    workbook
        .save_to_buffer()
        .context("Failed to serialize workbook")
}

/// Writes the projection to `path`, overwriting any existing file.
pub fn write_to_path(projection: &Projection, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(projection).context("Failed to build workbook")?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to write workbook to {}", path.display()))?;
    Ok(())
}
