use crate::errors::AppResult;
use crate::models::weight_event::WeightEvent;
use rusqlite::Connection;
use rusqlite::params;

/// Append one weight event to the `events` table.
/// The table is pre-existing; this tool never creates or migrates schema.
pub fn insert_weight_event(conn: &Connection, ev: &WeightEvent) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO events (type, startTime, data)
         VALUES (?1, ?2, ?3)",
    )?;

    stmt.execute(params![ev.kind, ev.start_time, ev.data])?;

    Ok(())
}
