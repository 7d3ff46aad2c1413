use crate::db::locate::find_candidate_dbs;
use crate::db::pool::DbPool;
use crate::db::queries::insert_weight_event;
use crate::errors::{AppError, AppResult};
use crate::models::source_record::SourceRecord;
use crate::models::weight_event::WeightEvent;
use crate::sheet::xlsx::read_sheet;
use crate::ui::messages;
use crate::utils::weight;
use rusqlite::Connection;
use std::path::Path;

/// How many records the post-read preview shows.
const PREVIEW_ROWS: usize = 5;

/// High-level logic for the one-shot import run.
pub struct ImportLogic;

impl ImportLogic {
    pub fn apply(db_path: &str, source_path: &str) -> AppResult<()> {
        //
        // 1. Preconditions. Both checked before anything is opened; the
        //    spreadsheet is never touched when the database is missing.
        //
        if !Path::new(db_path).exists() {
            messages::error(format!("Database not found at: {}", db_path));
            println!("Looking for .db files...");
            for candidate in find_candidate_dbs(Path::new(".")) {
                println!("  Found: {}", candidate.display());
            }
            return Err(AppError::DatabaseNotFound(db_path.to_string()));
        }

        if !Path::new(source_path).exists() {
            messages::error(format!("Excel file not found: {}", source_path));
            return Err(AppError::SourceNotFound(source_path.to_string()));
        }

        //
        // 2. Read the spreadsheet and show what was found.
        //
        messages::info(format!("Reading {}...", source_path));
        let sheet = read_sheet(Path::new(source_path))?;

        println!("   Found {} rows", sheet.records.len());
        println!("   Columns: {:?}", sheet.headers);
        if !sheet.records.is_empty() {
            println!("   First few rows:");
            for record in sheet.records.iter().take(PREVIEW_ROWS) {
                println!("   {} | {}", record.date.display(), record.grams);
            }
        }

        //
        // 3. Open the database. All inserts run inside one transaction,
        //    committed once after the last row.
        //
        println!();
        messages::info(format!("Connecting to database: {}", db_path));
        let mut pool = DbPool::new(db_path)?;
        let tx = pool.conn.transaction()?;

        //
        // 4. Transform and insert row by row. A failed row is reported and
        //    skipped; it never aborts the run.
        //
        let mut imported = 0usize;
        for (index, record) in sheet.records.iter().enumerate() {
            match import_row(&tx, record) {
                Ok(kg) => {
                    imported += 1;
                    println!("   ✓ {} → {} kg", record.date.display(), kg);
                }
                Err(e) => {
                    println!("   ✗ Row {} failed: {}", index + 1, e);
                }
            }
        }

        //
        // 5. Commit and report.
        //
        tx.commit()?;

        println!();
        messages::success(format!("Done! Imported {} weight entries.", imported));
        Ok(())
    }
}

/// Transform and insert one row. Returns the formatted kilogram value for
/// the confirmation line.
fn import_row(conn: &Connection, record: &SourceRecord) -> AppResult<String> {
    let date = record.resolve_date()?;
    let grams = record.grams_f64()?;
    let kg = weight::grams_to_kg_str(grams);

    let event = WeightEvent::new(date, &kg)?;
    insert_weight_event(conn, &event)?;

    Ok(kg)
}
