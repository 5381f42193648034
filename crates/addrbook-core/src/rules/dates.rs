use crate::error::CoreError;
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

pub fn local_today(now_utc: i64, local_offset: FixedOffset) -> Result<NaiveDate, CoreError> {
    let now = DateTime::<Utc>::from_timestamp(now_utc, 0).ok_or(CoreError::InvalidTimestamp)?;
    Ok(now.with_timezone(&local_offset).date_naive())
}

/// The calendar date a yearly `month`/`day` falls on in `year`.
///
/// Feb 29 maps to Feb 28 outside leap years.
pub fn occurrence_in_year(month: u32, day: u32, year: i32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
