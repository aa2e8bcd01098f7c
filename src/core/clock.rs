//! Time-of-day arithmetic for time registration values.
//!
//! Host screens store times as text in several shapes (`08:30`, `0830`,
//! `8.30`). These helpers parse them and do minute arithmetic without ever
//! touching a date.

use chrono::{Duration, NaiveTime, Timelike};
use rust_decimal::Decimal;

use super::error::SeError;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Parse `HH:MM`, `H:MM`, `HH.MM` or `HHMM` into a time of day.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, SeError> {
    let s = input.trim();
    if !s.is_ascii() {
        return Err(SeError::invalid_input("parse time of day", input));
    }
    let (hours, minutes) = match s.find([':', '.']) {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None if s.len() == 4 => (&s[..2], &s[2..]),
        None => return Err(SeError::invalid_input("parse time of day", input)),
    };

    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() != 2
        || !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit())
    {
        return Err(SeError::invalid_input("parse time of day", input));
    }

    let h: u32 = hours
        .parse()
        .map_err(|_| SeError::invalid_input("parse time of day", input))?;
    let m: u32 = minutes
        .parse()
        .map_err(|_| SeError::invalid_input("parse time of day", input))?;
    NaiveTime::from_hms_opt(h, m, 0)
        .ok_or_else(|| SeError::invalid_input("parse time of day", input))
}

/// Add (or with a negative value, subtract) minutes.
///
/// Returns the new time and the number of days carried over midnight
/// (negative when moving before midnight).
pub fn add_minutes(time: NaiveTime, minutes: i64) -> (NaiveTime, i64) {
    let (result, overflow_secs) = time.overflowing_add_signed(Duration::minutes(minutes));
    (result, overflow_secs / 86_400)
}

/// Whole minutes from `start` to `end`, wrapping past midnight.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let start_min = i64::from(start.hour() * 60 + start.minute());
    let end_min = i64::from(end.hour() * 60 + end.minute());
    (end_min - start_min).rem_euclid(MINUTES_PER_DAY)
}

/// Hours from `start` to `end` as a decimal rounded to two places,
/// e.g. 08:00 → 16:45 gives `8.75`.
pub fn hours_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    (Decimal::from(minutes_between(start, end)) / Decimal::from(60)).round_dp(2)
}

/// Format as `HH:MM`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
