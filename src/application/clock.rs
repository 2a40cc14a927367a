//! Injectable wall clock.

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current instant, shared by services that default to "now".
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Returns a clock backed by the system time.
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Returns a clock frozen at `instant`.
pub fn fixed_clock(instant: DateTime<Utc>) -> Clock {
    Arc::new(move || instant)
}
