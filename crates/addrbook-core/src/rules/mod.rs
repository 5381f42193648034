pub mod birthdays;
pub mod dates;

pub use birthdays::{
    congratulation_date, upcoming_birthdays, validate_window_days, UpcomingBirthday,
    DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
pub use dates::{is_leap_year, local_today, occurrence_in_year};
