//! Timestamp parsing for the order dataset.

use algolab_common::utils::error::{Error, Result};
use chrono::NaiveDateTime;

/// Accepted layout: `YYYY-MM-DDTHH:MM:SS.ffffff`. The fraction is required.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Parses a microsecond timestamp, read as UTC, into epoch milliseconds.
///
/// ```
/// use algolab_adapters::ingest::parse_timestamp;
///
/// assert_eq!(parse_timestamp("1970-01-01T00:00:01.500000").unwrap(), 1500);
/// ```
pub fn parse_timestamp(raw: &str) -> Result<i64> {
    let trimmed = raw.trim();
    // chrono treats `%.6f` as optional when parsing.
    let has_micros = trimmed
        .rsplit_once('.')
        .is_some_and(|(_, frac)| frac.len() == 6 && frac.bytes().all(|b| b.is_ascii_digit()));
    if !has_micros {
        return Err(Error::BadTimestamp(raw.to_string()));
    }
    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .map(|dt| dt.and_utc().timestamp_millis())
        .map_err(|_| Error::BadTimestamp(raw.to_string()))
}

/// Like [`parse_timestamp`], but maps unparseable input to `0` so the record
/// is kept and sorts first.
pub fn timestamp_or_zero(raw: &str) -> i64 {
    parse_timestamp(raw).unwrap_or(0)
}
