use chrono::{NaiveDate, NaiveDateTime};

/// Strict DD/MM/YYYY parsing ("05/03/2024" = 5 March 2024).
pub fn parse_day_month_year(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok()
}

/// Timestamp stored in events.startTime: the record's calendar date at
/// noon, with a literal UTC suffix. No timezone conversion happens here;
/// the surrounding application stamps all its timestamps the same way.
pub fn noon_stamp(date: NaiveDate) -> String {
    let noon: NaiveDateTime = date.and_hms_opt(12, 0, 0).unwrap();
    format!("{}.000Z", noon.format("%Y-%m-%dT%H:%M:%S"))
}
