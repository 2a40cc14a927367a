//! Short link entity mapping a sequence code to its original URL.

use chrono::{DateTime, Utc};

/// A stored URL mapping.
///
/// `short_code` values come from a monotonically increasing sequence starting
/// at 1. Entries are never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub short_code: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn new(short_code: i64, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            short_code,
            original_url,
            created_at,
        }
    }
}
