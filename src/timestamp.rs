//! Timestamp conversion between T8 wire form and ISO-8601 text
//!
//! T8 addresses measurements by integer seconds since the Unix epoch. Users
//! type timestamps as `YYYY-MM-DDTHH:MM:SS`. All conversions are UTC; the
//! local timezone of the host is never consulted.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Utc};

/// Canonical textual form of a timestamp
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Date-time layouts accepted without an explicit offset, tried in order
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Errors that can occur during timestamp conversion
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// The text is not an ISO-8601 date or date-time
    #[error("Invalid timestamp '{input}': expected ISO-8601 (YYYY-MM-DDTHH:MM:SS)")]
    Parse {
        /// The rejected input
        input: String,
    },

    /// The instant cannot be written with a four-digit year
    #[error("Timestamp {0} is outside the representable range")]
    OutOfRange(i64),
}

/// Convert epoch seconds to `YYYY-MM-DDTHH:MM:SS` (UTC)
pub fn to_iso(ts: i64) -> Result<String, TimestampError> {
    let datetime =
        DateTime::<Utc>::from_timestamp(ts, 0).ok_or(TimestampError::OutOfRange(ts))?;
    if !(0..=9999).contains(&datetime.year()) {
        return Err(TimestampError::OutOfRange(ts));
    }
    Ok(datetime.format(ISO_FORMAT).to_string())
}

/// Convert an ISO-8601 string to epoch seconds.
///
/// Strings without an offset are taken as UTC. An explicit offset (or `Z`)
/// is honoured. Fractional seconds are truncated. Second `60` is rejected.
pub fn to_unix(iso: &str) -> Result<i64, TimestampError> {
    parse_utc(iso.trim()).ok_or_else(|| TimestampError::Parse {
        input: iso.to_string(),
    })
}

fn parse_utc(text: &str) -> Option<i64> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return is_regular_second(datetime.nanosecond()).then(|| datetime.timestamp());
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return is_regular_second(naive.nanosecond()).then(|| naive.and_utc().timestamp());
        }
    }

    // Bare dates mean midnight
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp())
}

/// chrono encodes a leap second `:60` as nanoseconds past one billion
fn is_regular_second(nanosecond: u32) -> bool {
    nanosecond < 1_000_000_000
}
