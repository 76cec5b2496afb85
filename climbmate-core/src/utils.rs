//! Day-granularity date parsing for date-range filters.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{CoreError, CoreResult};

fn parse_day(raw: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// Parses `YYYY-MM-DD` as the first instant of that UTC day.
pub fn parse_day_start(raw: &str) -> CoreResult<DateTime<Utc>> {
    Ok(parse_day(raw)?.and_time(NaiveTime::MIN).and_utc())
}

/// Parses `YYYY-MM-DD` as the last representable instant of that UTC day,
/// so an inclusive upper bound covers the whole day.
pub fn parse_day_end(raw: &str) -> CoreResult<DateTime<Utc>> {
    let end_of_day = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
        .ok_or_else(|| CoreError::InvalidDate(raw.to_string()))?;
    Ok(parse_day(raw)?.and_time(end_of_day).and_utc())
}
