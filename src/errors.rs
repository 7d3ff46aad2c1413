//! Unified application error type.
//! All modules (db, core, sheet, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database not found: {0}")]
    DatabaseNotFound(String),

    // ---------------------------
    // Spreadsheet-related
    // ---------------------------
    #[error("Spreadsheet error: {0}")]
    Sheet(#[from] calamine::XlsxError),

    #[error("Spreadsheet not found: {0}")]
    SourceNotFound(String),

    #[error("Workbook has no worksheets: {0}")]
    NoWorksheet(String),

    // ---------------------------
    // Per-row errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid weight value: {0}")]
    InvalidWeight(String),

    // ---------------------------
    // Payload serialization
    // ---------------------------
    #[error("Payload serialization error: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
