use crate::domain::{Birthday, Name, Record};
use crate::error::CoreError;
use crate::rules::dates::occurrence_in_year;
use chrono::{Datelike, Days, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: i64 = 7;
pub const MAX_WINDOW_DAYS: i64 = 366;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub birthday: Birthday,
    pub congratulation_date: NaiveDate,
}

pub fn validate_window_days(days: i64) -> Result<i64, CoreError> {
    if !(0..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(CoreError::InvalidWindowDays(days));
    }
    Ok(days)
}

/// Saturday and Sunday move forward to the following Monday.
pub fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    let weekday = occurrence.weekday().num_days_from_monday();
    if weekday < 5 {
        return occurrence;
    }
    occurrence
        .checked_add_days(Days::new(u64::from(7 - weekday)))
        .unwrap_or(occurrence)
}

/// Birthdays whose occurrence in `today`'s year lies `0..=window_days` days ahead.
///
/// Dates already passed this year are not carried over into next year.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window_days: i64,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let birthday = *record.birthday()?;
            let occurrence = occurrence_in_year(birthday.month(), birthday.day(), today.year())?;
            let days_until = occurrence.signed_duration_since(today).num_days();
            if !(0..=window_days).contains(&days_until) {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name().clone(),
                birthday,
                congratulation_date: congratulation_date(occurrence),
            })
        })
        .collect()
}
