//! Request date/time validation.
//!
//! Both provider queries take a `YYYY-MM-DD` date and, for availability, an
//! `HH:MM` window on the 10-minute grid. Each failure maps to a distinct
//! [`EngineError`] so the UI layer can show a specific message without any
//! network round trip.

use chrono::{DateTime, Utc};

use crate::clock;
use crate::error::{EngineError, Result};
use crate::schedule::SLOT_MINUTES;

/// Validates a request date: strict `YYYY-MM-DD` shape, not before today in
/// the civil timezone. Returns the date unchanged.
///
/// Only the shape is checked, not calendar validity; the provider rejects
/// impossible dates itself and the comparison below is lexicographic, which
/// is order-correct for this shape.
pub fn validate_date(value: &str, now: DateTime<Utc>) -> Result<String> {
    if !is_date_shaped(value) {
        return Err(EngineError::InvalidDateFormat);
    }
    if value < clock::today_date(now).as_str() {
        return Err(EngineError::DateInPast);
    }
    Ok(value.to_string())
}

/// Validates a request time: strict `HH:MM`, on the 10-minute grid. Returns
/// the re-formatted clock string.
pub fn validate_request_time(value: &str) -> Result<String> {
    let minute = clock::parse_clock(value).ok_or(EngineError::InvalidTimeFormat)?;
    if minute % SLOT_MINUTES != 0 {
        return Err(EngineError::TimeNotOnGrid);
    }
    Ok(clock::minute_to_clock(i64::from(minute)))
}

/// Validates an availability window: both times valid and the end strictly
/// later than the start. Returns the normalized pair.
pub fn validate_time_window(start: &str, end: &str) -> Result<(String, String)> {
    let start = validate_request_time(start)?;
    let end = validate_request_time(end)?;
    if start >= end {
        return Err(EngineError::EndNotAfterStart);
    }
    Ok((start, end))
}

fn is_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}
