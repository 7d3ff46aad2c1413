use crate::errors::{AppError, AppResult};
use crate::utils::date;
use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};

/// Date cell resolved once when the sheet is read: either text still to be
/// parsed as DD/MM/YYYY, or a native Excel date cell.
#[derive(Debug, Clone)]
pub enum DateCell {
    Text(String),
    Native(NaiveDateTime),
}

impl DateCell {
    pub fn from_cell(cell: &Data) -> Self {
        match cell {
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => DateCell::Native(naive),
                None => DateCell::Text(dt.to_string()),
            },
            Data::String(s) => DateCell::Text(s.clone()),
            // Anything else (empty, error, raw number) is carried as text
            // so the per-row error can name the offending content.
            other => DateCell::Text(other.to_string()),
        }
    }

    /// The value as it appeared in the sheet, for the confirmation line.
    pub fn display(&self) -> String {
        match self {
            DateCell::Text(s) => s.clone(),
            DateCell::Native(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// One spreadsheet row, positionally addressed: column 0 is the date,
/// column 1 the mass in grams. Discarded after transformation.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    pub date: DateCell,
    pub grams: Data,
}

impl SourceRecord {
    /// Calendar date of the measurement. Text cells parse strictly as
    /// DD/MM/YYYY; native date cells are accepted directly.
    pub fn resolve_date(&self) -> AppResult<NaiveDate> {
        match &self.date {
            DateCell::Text(s) => {
                date::parse_day_month_year(s).ok_or_else(|| AppError::InvalidDate(s.clone()))
            }
            DateCell::Native(dt) => Ok(dt.date()),
        }
    }

    /// Mass in grams as a decimal number. Numeric cells are used as-is,
    /// text cells must parse as a float, everything else fails the row.
    pub fn grams_f64(&self) -> AppResult<f64> {
        match &self.grams {
            Data::Float(f) => Ok(*f),
            Data::Int(i) => Ok(*i as f64),
            Data::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| AppError::InvalidWeight(s.clone())),
            other => Err(AppError::InvalidWeight(other.to_string())),
        }
    }
}
