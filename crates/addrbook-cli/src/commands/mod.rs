use crate::error::CommandError;
use addrbook_core::AddressBook;

pub mod birthdays;
pub mod contacts;

pub type CommandResult = Result<String, CommandError>;

pub struct Context<'a> {
    pub book: &'a mut AddressBook,
    pub window_days: i64,
}

pub fn hello() -> CommandResult {
    Ok("How can I help you?".to_string())
}
