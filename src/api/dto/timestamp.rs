//! DTOs for the timestamp endpoint.

use serde::Serialize;

use crate::domain::entities::Timestamp;

#[derive(Debug, Serialize)]
pub struct TimestampResponse {
    /// Epoch milliseconds.
    pub unix: i64,
    pub utc: String,
}

impl From<Timestamp> for TimestampResponse {
    fn from(timestamp: Timestamp) -> Self {
        Self {
            unix: timestamp.unix_millis,
            utc: timestamp.utc,
        }
    }
}
