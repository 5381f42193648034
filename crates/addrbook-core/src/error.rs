use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Name is required and cannot be empty.")]
    EmptyName,
    #[error("Invalid phone number {0}: it must consist of exactly 10 digits.")]
    InvalidPhone(String),
    #[error("Invalid date {0}: use the DD.MM.YYYY format.")]
    InvalidBirthday(String),
    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),
    #[error("invalid birthday window: {0} days")]
    InvalidWindowDays(i64),
    #[error("invalid timestamp")]
    InvalidTimestamp,
}
