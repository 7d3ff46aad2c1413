//! Spreadsheet reading: first worksheet, first row treated as header,
//! remaining rows become SourceRecords.

use crate::errors::{AppError, AppResult};
use crate::models::source_record::{DateCell, SourceRecord};
use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;

pub struct Sheet {
    pub headers: Vec<String>,
    pub records: Vec<SourceRecord>,
}

pub fn read_sheet(path: &Path) -> AppResult<Sheet> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::NoWorksheet(path.display().to_string()))??;

    let mut rows = range.rows();

    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .unwrap_or_default();

    let records: Vec<SourceRecord> = rows
        .map(|row| SourceRecord {
            date: DateCell::from_cell(row.first().unwrap_or(&Data::Empty)),
            grams: row.get(1).cloned().unwrap_or(Data::Empty),
        })
        .collect();

    Ok(Sheet { headers, records })
}
