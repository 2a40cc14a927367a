//! Calendar string parsing and legacy date rendering.
//!
//! The accepted formats follow what browsers' `Date` constructor reliably
//! understands: ISO-8601 dates and date-times, RFC 2822 strings, and
//! English month-name forms. Strings without an explicit offset are read as UTC.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use regex::Regex;
use std::sync::LazyLock;

/// Largest absolute epoch-milliseconds value a date may have (±100 000 000 days).
pub const MAX_EPOCH_MILLIS: i64 = 8_640_000_000_000_000;

/// `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, also with a signed six-digit year.
static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]\d{6}|\d{4})(?:-(\d{2})(?:-(\d{2}))?)?$").unwrap()
});

/// `YYYY-MM-DDTHH:MM[:SS[.fff]][Z|±HH:MM]`, `T` may be a space.
static ISO_DATE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+-]\d{6}|\d{4})-(\d{2})-(\d{2})[Tt ](\d{2}):(\d{2})(?::(\d{2})(?:[.,](\d{1,9}))?)?\s*([Zz]|[+-]\d{2}:?\d{2})?$",
    )
    .unwrap()
});

// Text forms are matched after the leading weekday and trailing zone name
// are removed, so neither appears here. `%B` also accepts abbreviations.
const TEXT_DATE_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%m/%d/%Y",
    "%Y/%m/%d",
];

const TEXT_DATE_TIME_FORMATS: &[&str] = &[
    "%B %d, %Y %H:%M:%S",
    "%B %d, %Y %H:%M",
    "%B %d %Y %H:%M:%S",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

/// Zone names equivalent to UTC that may trail a text date.
const UTC_ZONE_NAMES: &[&str] = &["GMT", "UTC", "Z"];

const WEEKDAY_NAMES: &[&str] = &[
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DateParseError {
    #[error("unrecognized date format: {0}")]
    Unrecognized(String),

    #[error("date is outside the supported range")]
    OutOfRange,
}

/// Parses a calendar date string into a UTC instant.
///
/// # Errors
///
/// Returns [`DateParseError::Unrecognized`] when no supported format matches
/// or the fields do not form a real date, and [`DateParseError::OutOfRange`]
/// when the instant lies beyond [`MAX_EPOCH_MILLIS`].
pub fn parse_calendar(input: &str) -> Result<DateTime<Utc>, DateParseError> {
    let input = input.trim();
    let unrecognized = || DateParseError::Unrecognized(input.to_string());

    let instant = parse_iso_date(input)
        .or_else(|| parse_iso_date_time(input))
        .or_else(|| {
            DateTime::parse_from_rfc2822(input)
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        })
        .or_else(|| parse_text(input))
        .ok_or_else(unrecognized)?;

    check_range(instant)
}

/// Converts epoch milliseconds into a UTC instant.
///
/// # Errors
///
/// Returns [`DateParseError::OutOfRange`] beyond [`MAX_EPOCH_MILLIS`].
pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>, DateParseError> {
    if millis.unsigned_abs() > MAX_EPOCH_MILLIS as u64 {
        return Err(DateParseError::OutOfRange);
    }

    DateTime::from_timestamp_millis(millis).ok_or(DateParseError::OutOfRange)
}

/// Renders an instant as `Fri, 25 Dec 2015 00:00:00 GMT`.
pub fn to_utc_string(instant: &DateTime<Utc>) -> String {
    format!(
        "{}, {:02} {} {} {}",
        instant.format("%a"),
        instant.day(),
        instant.format("%b"),
        format_year(instant.year()),
        instant.format("%H:%M:%S GMT")
    )
}

/// Renders a calendar date as `Fri Dec 25 2015`.
pub fn to_date_string(date: &NaiveDate) -> String {
    format!(
        "{} {} {:02} {}",
        date.format("%a"),
        date.format("%b"),
        date.day(),
        format_year(date.year())
    )
}

fn format_year(year: i32) -> String {
    if year < 0 {
        format!("-{:06}", -year)
    } else {
        format!("{:04}", year)
    }
}

fn check_range(instant: DateTime<Utc>) -> Result<DateTime<Utc>, DateParseError> {
    if instant.timestamp_millis().unsigned_abs() > MAX_EPOCH_MILLIS as u64 {
        return Err(DateParseError::OutOfRange);
    }
    Ok(instant)
}

fn parse_year(raw: &str) -> Option<i32> {
    let year: i32 = raw.parse().ok()?;
    // "-000000" is not a valid extended year
    if year == 0 && raw.starts_with('-') {
        return None;
    }
    Some(year)
}

fn parse_iso_date(input: &str) -> Option<DateTime<Utc>> {
    let caps = ISO_DATE_REGEX.captures(input)?;

    let year = parse_year(&caps[1])?;
    let month = caps.get(2).map_or(Some(1), |m| m.as_str().parse().ok())?;
    let day = caps.get(3).map_or(Some(1), |d| d.as_str().parse().ok())?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(date.and_time(NaiveTime::MIN).and_utc())
}

fn parse_iso_date_time(input: &str) -> Option<DateTime<Utc>> {
    let caps = ISO_DATE_TIME_REGEX.captures(input)?;

    let year = parse_year(&caps[1])?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    let hour: u32 = caps[4].parse().ok()?;
    let minute: u32 = caps[5].parse().ok()?;
    let second: u32 = caps.get(6).map_or(Some(0), |s| s.as_str().parse().ok())?;
    let millis: u32 = match caps.get(7) {
        Some(fraction) => {
            let digits: String = fraction.as_str().chars().chain("00".chars()).take(3).collect();
            digits.parse().ok()?
        }
        None => 0,
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
    let local = NaiveDateTime::new(date, time);

    match caps.get(8).map(|m| m.as_str()) {
        None | Some("Z") | Some("z") => Some(local.and_utc()),
        Some(offset) => {
            let offset = parse_offset(offset)?;
            offset
                .from_local_datetime(&local)
                .single()
                .map(|dt| dt.with_timezone(&Utc))
        }
    }
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let sign = if raw.starts_with('-') { -1 } else { 1 };
    let digits: String = raw[1..].chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

fn parse_text(input: &str) -> Option<DateTime<Utc>> {
    let normalized = input.split_whitespace().collect::<Vec<_>>().join(" ");
    let text = strip_leading_weekday(strip_utc_zone(&normalized));

    TEXT_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            TEXT_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .map(|naive| naive.and_utc())
}

/// Drops a trailing `GMT`, `UTC` or `Z` and any separators before it.
fn strip_utc_zone(input: &str) -> &str {
    let stripped = UTC_ZONE_NAMES
        .iter()
        .find_map(|zone| {
            let split = input.len().checked_sub(zone.len())?;
            let head = input.get(..split)?;
            let tail = input.get(split..)?;
            (tail.eq_ignore_ascii_case(zone) && head.ends_with([' ', ','])).then_some(head)
        })
        .unwrap_or(input);

    stripped.trim_end_matches([' ', ','])
}

/// Drops a leading weekday name, full or abbreviated. It is not checked
/// against the date.
fn strip_leading_weekday(input: &str) -> &str {
    let Some((first, rest)) = input.split_once(' ') else {
        return input;
    };

    let word = first.trim_end_matches(',').to_ascii_lowercase();
    let is_weekday = WEEKDAY_NAMES
        .iter()
        .any(|day| word == *day || (word.len() == 3 && day.starts_with(word.as_str())));

    if is_weekday {
        rest.trim_start_matches([' ', ','])
    } else {
        input
    }
}
