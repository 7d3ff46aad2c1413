#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wti() -> Command {
    cargo_bin_cmd!("weight-importer")
}

/// Create a unique test DB path inside the system temp dir, remove any
/// existing file and create the pre-existing events table the importer
/// expects (the baby-tracker schema).
pub fn setup_events_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weight_importer.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL,
            startTime TEXT NOT NULL,
            endTime TEXT,
            note TEXT,
            data TEXT DEFAULT '{}',
            createdAt TEXT DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .expect("create events table");

    db_path
}

/// Create a temporary spreadsheet path and ensure it's removed
pub fn temp_source(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_weight_importer.xlsx", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Grams cell content for spreadsheet fixtures
pub enum Cell {
    Num(f64),
    Text(&'static str),
}

/// Write a source spreadsheet with a header row and the given
/// (date text, grams) rows.
pub fn write_source_xlsx(path: &str, rows: &[(&str, Cell)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write(0, 0, "Date").expect("write header");
    worksheet.write(0, 1, "Weight_grams").expect("write header");

    for (i, (date, grams)) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write(r, 0, *date).expect("write date");
        match grams {
            Cell::Num(n) => worksheet.write(r, 1, *n).expect("write grams"),
            Cell::Text(s) => worksheet.write(r, 1, *s).expect("write grams"),
        };
    }

    workbook.save(path).expect("save xlsx");
}

/// Write a source spreadsheet whose date column holds native Excel date
/// cells instead of text.
pub fn write_source_xlsx_native(path: &str, rows: &[((u16, u8, u8), f64)]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let date_format = Format::new().set_num_format("dd/mm/yyyy");

    worksheet.write(0, 0, "Date").expect("write header");
    worksheet.write(0, 1, "Weight_grams").expect("write header");

    for (i, ((year, month, day), grams)) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let date = ExcelDateTime::from_ymd(*year, *month, *day).expect("excel date");
        worksheet
            .write_with_format(r, 0, &date, &date_format)
            .expect("write date");
        worksheet.write(r, 1, *grams).expect("write grams");
    }

    workbook.save(path).expect("save xlsx");
}

/// Load all persisted events as (type, startTime, data), insertion order.
pub fn load_events(db_path: &str) -> Vec<(String, String, String)> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let mut stmt = conn
        .prepare("SELECT type, startTime, data FROM events ORDER BY id")
        .expect("prepare");

    let rows = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
        .expect("query");

    rows.map(|r| r.expect("row")).collect()
}
