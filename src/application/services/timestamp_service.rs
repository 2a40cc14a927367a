//! Date token interpretation for the timestamp API.

use crate::application::clock::{Clock, system_clock};
use crate::domain::entities::Timestamp;
use crate::error::AppError;
use crate::utils::dates::{from_epoch_millis, parse_calendar};

/// Integers above this value are read as epoch milliseconds; smaller ones
/// (such as a four-digit year) go through calendar parsing.
pub const EPOCH_MILLIS_THRESHOLD: i64 = 10_000;

/// Interprets client-supplied date tokens.
pub struct TimestampService {
    clock: Clock,
}

impl TimestampService {
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }

    /// Interprets a date token.
    ///
    /// - Empty token: the current instant.
    /// - Integer token above [`EPOCH_MILLIS_THRESHOLD`]: epoch milliseconds,
    ///   returned without trying calendar parsing.
    /// - Anything else: a calendar date string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidDate`] if the token is neither a valid epoch
    /// value nor a parsable calendar date.
    pub fn interpret(&self, token: &str) -> Result<Timestamp, AppError> {
        let token = token.trim();

        if token.is_empty() {
            return Ok(Timestamp::from((self.clock)()));
        }

        if let Some(millis) = parse_epoch_millis(token) {
            let instant = from_epoch_millis(millis).map_err(|_| AppError::InvalidDate)?;
            return Ok(Timestamp::from(instant));
        }

        parse_calendar(token)
            .map(Timestamp::from)
            .map_err(|e| {
                tracing::debug!("Rejected date token {:?}: {}", token, e);
                AppError::InvalidDate
            })
    }
}

impl Default for TimestampService {
    fn default() -> Self {
        Self::new(system_clock())
    }
}

/// Parses `token` as epoch milliseconds if it is a plain integer above the threshold.
fn parse_epoch_millis(token: &str) -> Option<i64> {
    token
        .parse::<i64>()
        .ok()
        .filter(|value| *value > EPOCH_MILLIS_THRESHOLD)
}
