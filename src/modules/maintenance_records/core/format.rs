// Text renderings shared by the inbound adapters.

use chrono::{DateTime, FixedOffset, NaiveTime, Timelike};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeOfDayError {
    #[error("invalid time of day '{0}', expected HH:MM")]
    Malformed(String),

    #[error("no timestamp to move to '{0}'")]
    NothingToAdjust(String),
}

pub fn format_mttr(minutes: i64) -> String {
    format!("{minutes}m")
}

/// Elapsed time as `"{h}h {m}m"`, counting whole minutes only.
pub fn format_duration(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> String {
    let minutes = (*end - *start).num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Twelve-hour label such as `08:05 AM`.
pub fn format_clock_time(at: &DateTime<FixedOffset>) -> String {
    at.format("%I:%M %p").to_string()
}

/// Twenty-four-hour `HH:MM`, the value shown by the time control.
pub fn format_time_input(at: &DateTime<FixedOffset>) -> String {
    at.format("%H:%M").to_string()
}

/// Moves `at` to another wall-clock time on the same date and offset.
/// Seconds and sub-seconds are kept.
pub fn with_time_of_day(
    at: &DateTime<FixedOffset>,
    hh_mm: &str,
) -> Result<DateTime<FixedOffset>, TimeOfDayError> {
    let time = NaiveTime::parse_from_str(hh_mm.trim(), "%H:%M")
        .map_err(|_| TimeOfDayError::Malformed(hh_mm.to_string()))?;
    at.with_hour(time.hour())
        .and_then(|moved| moved.with_minute(time.minute()))
        .ok_or_else(|| TimeOfDayError::Malformed(hh_mm.to_string()))
}

/// Picks the explicit timestamp, else `hh_mm` applied to `now`, else `now`.
pub fn resolve_time(
    explicit: Option<DateTime<FixedOffset>>,
    hh_mm: Option<&str>,
    now: &DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>, TimeOfDayError> {
    match (explicit, hh_mm) {
        (Some(at), _) => Ok(at),
        (None, Some(hh_mm)) => with_time_of_day(now, hh_mm),
        (None, None) => Ok(*now),
    }
}

/// Applies an optional `HH:MM` override to an optional timestamp.
/// An override without a timestamp to move is an error.
pub fn adjust_time_of_day(
    at: Option<DateTime<FixedOffset>>,
    hh_mm: Option<&str>,
) -> Result<Option<DateTime<FixedOffset>>, TimeOfDayError> {
    match (at, hh_mm) {
        (Some(at), Some(hh_mm)) => with_time_of_day(&at, hh_mm).map(Some),
        (None, Some(hh_mm)) => Err(TimeOfDayError::NothingToAdjust(hh_mm.to_string())),
        (at, None) => Ok(at),
    }
}
