//! Interpreted date token.

use chrono::{DateTime, Utc};

use crate::utils::dates::to_utc_string;

/// A resolved instant in both representations the timestamp API returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub unix_millis: i64,
    pub utc: String,
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self {
            unix_millis: instant.timestamp_millis(),
            utc: to_utc_string(&instant),
        }
    }
}
