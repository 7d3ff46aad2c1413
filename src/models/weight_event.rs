use crate::errors::AppResult;
use crate::utils::date;
use chrono::NaiveDate;
use serde::Serialize;

/// Fixed tag stored in events.type for every row this tool appends.
pub const EVENT_TYPE_WEIGHT: &str = "WEIGHT";

/// JSON payload stored in events.data.
#[derive(Debug, Serialize)]
pub struct WeightPayload {
    pub amount: String,
    pub unit: &'static str,
}

#[derive(Debug)]
pub struct WeightEvent {
    pub kind: &'static str, // ⇔ events.type (TEXT, always 'WEIGHT')
    pub start_time: String, // ⇔ events.startTime (TEXT, ISO8601 + ".000Z")
    pub data: String,       // ⇔ events.data (TEXT, compact JSON)
}

impl WeightEvent {
    /// Build the persisted shape from a measurement date and the already
    /// formatted kilogram value.
    pub fn new(date: NaiveDate, kg: &str) -> AppResult<Self> {
        let payload = WeightPayload {
            amount: kg.to_string(),
            unit: "kg",
        };

        Ok(Self {
            kind: EVENT_TYPE_WEIGHT,
            start_time: date::noon_stamp(date),
            data: serde_json::to_string(&payload)?,
        })
    }
}
