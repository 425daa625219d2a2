//! Conversions between absolute instants, minute-of-day values in the fixed
//! civil timezone, and `"HH:MM"` clock strings.
//!
//! The provider expresses every reservation as an RFC 3339 instant; the rest
//! of the engine works in whole minutes of the civil day. KST has no daylight
//! saving, so a civil day is always exactly [`MINUTES_PER_DAY`] minutes.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// The fixed civil timezone every minute-of-day value is expressed in.
pub const CIVIL_TZ: Tz = chrono_tz::Asia::Seoul;

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Converts an RFC 3339 instant to its minute of day (0–1439) in the civil
/// timezone. Returns `None` when the input is not a parseable instant.
pub fn civil_minute_of_day(instant: &str) -> Option<u32> {
    let parsed = DateTime::parse_from_rfc3339(instant).ok()?;
    let local = parsed.with_timezone(&CIVIL_TZ);
    Some(local.hour() * 60 + local.minute())
}

/// Formats a minute count as a zero-padded `"HH:MM"` clock string.
///
/// The value is wrapped modulo one day; the double-modulo keeps negative
/// inputs non-negative, so `-60` formats as `"23:00"`.
pub fn minute_to_clock(total_minutes: i64) -> String {
    let day = i64::from(MINUTES_PER_DAY);
    let minute = ((total_minutes % day) + day) % day;
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Parses a strict `"HH:MM"` clock string into a minute of day.
///
/// Exactly two digits each; hour 00–23, minute 00–59. Any other shape is
/// `None`.
pub fn parse_clock(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    let hour = parse_two_digits(&bytes[0..2])?;
    let minute = parse_two_digits(&bytes[3..5])?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour * 60 + minute)
}

/// Parses a provider operating-hours setting time, which is `"HH:MM"` with an
/// optional `":SS"` suffix. The seconds are validated for shape only.
pub fn parse_setting_time(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() == 8 && bytes[5] == b':' {
        parse_two_digits(&bytes[6..8])?;
        return parse_clock(&value[0..5]);
    }
    parse_clock(value)
}

/// The `"YYYY-MM-DD"` date of the given instant in the civil timezone.
pub fn today_date(now: DateTime<Utc>) -> String {
    now.with_timezone(&CIVIL_TZ).format("%Y-%m-%d").to_string()
}

/// The minute of day of the given instant in the civil timezone.
pub fn current_minute_of_day(now: DateTime<Utc>) -> u32 {
    let local = now.with_timezone(&CIVIL_TZ);
    local.hour() * 60 + local.minute()
}

/// Rounds a minute value up to the next multiple of `step`, clamped to
/// `[0, 1440]`. Returns `None` when `step` is zero.
pub fn ceil_to_step(minute: u32, step: u32) -> Option<u32> {
    if step == 0 {
        return None;
    }
    let next = minute.div_ceil(step) * step;
    Some(next.min(MINUTES_PER_DAY))
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 || !bytes[0].is_ascii_digit() || !bytes[1].is_ascii_digit() {
        return None;
    }
    Some(u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn instant_converts_in_civil_timezone() {
        // 01:30 UTC is 10:30 KST.
        assert_eq!(civil_minute_of_day("2026-03-16T01:30:00Z"), Some(630));
        // Offset input already in KST.
        assert_eq!(civil_minute_of_day("2026-03-16T10:30:00+09:00"), Some(630));
    }

    #[test]
    fn unparseable_instant_is_none() {
        assert_eq!(civil_minute_of_day("not-a-date"), None);
        assert_eq!(civil_minute_of_day(""), None);
        // Date without offset is not an instant.
        assert_eq!(civil_minute_of_day("2026-03-16T10:30:00"), None);
    }

    #[test]
    fn clock_string_wraps_and_pads() {
        assert_eq!(minute_to_clock(0), "00:00");
        assert_eq!(minute_to_clock(605), "10:05");
        assert_eq!(minute_to_clock(1440), "00:00");
        assert_eq!(minute_to_clock(-60), "23:00");
        assert_eq!(minute_to_clock(1500), "01:00");
    }

    #[test]
    fn parse_clock_accepts_only_strict_shape() {
        assert_eq!(parse_clock("09:00"), Some(540));
        assert_eq!(parse_clock("23:59"), Some(1439));
        assert_eq!(parse_clock("24:00"), None);
        assert_eq!(parse_clock("09:60"), None);
        assert_eq!(parse_clock("9:00"), None);
        assert_eq!(parse_clock("09:0"), None);
        assert_eq!(parse_clock("09-00"), None);
        assert_eq!(parse_clock("09:00:00"), None);
    }

    #[test]
    fn setting_time_tolerates_seconds() {
        assert_eq!(parse_setting_time("09:00"), Some(540));
        assert_eq!(parse_setting_time("09:00:00"), Some(540));
        assert_eq!(parse_setting_time("09:00:0"), None);
        assert_eq!(parse_setting_time("09:00:xx"), None);
    }

    #[test]
    fn today_and_current_minute_use_civil_timezone() {
        // 2026-03-16T16:05:00Z is 2026-03-17 01:05 KST.
        let now = Utc.with_ymd_and_hms(2026, 3, 16, 16, 5, 0).unwrap();
        assert_eq!(today_date(now), "2026-03-17");
        assert_eq!(current_minute_of_day(now), 65);
    }

    #[test]
    fn ceil_to_step_rounds_up_and_clamps() {
        assert_eq!(ceil_to_step(605, 10), Some(610));
        assert_eq!(ceil_to_step(610, 10), Some(610));
        assert_eq!(ceil_to_step(1439, 10), Some(1440));
        assert_eq!(ceil_to_step(0, 10), Some(0));
        assert_eq!(ceil_to_step(5, 0), None);
    }
}
