use addrbook_config::ConfigError;
use addrbook_core::CoreError;
use addrbook_store::error::{StoreError, StoreErrorKind};
use anyhow::Error;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

pub const CONTACT_NOT_FOUND: &str = "Contact not found.";

/// Failures a command reports back to the user without ending the session.
#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Enter all required arguments.")]
    InsufficientArguments,
}

impl CommandError {
    pub fn contact_not_found() -> Self {
        CommandError::NotFound(CONTACT_NOT_FOUND.to_string())
    }
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PhoneNotFound(_) => CommandError::NotFound(err.to_string()),
            other => CommandError::Validation(other.to_string()),
        }
    }
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

fn exit_status(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(store_err) = cause.downcast_ref::<StoreError>() {
            return store_exit_code(store_err);
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
    }
    EXIT_FAILURE
}

fn store_exit_code(err: &StoreError) -> u8 {
    match err.kind() {
        StoreErrorKind::Corrupt
        | StoreErrorKind::UnsupportedVersion
        | StoreErrorKind::DuplicateName
        | StoreErrorKind::InvalidDataPath => EXIT_INVALID_INPUT,
        StoreErrorKind::MissingHomeDir | StoreErrorKind::Encode | StoreErrorKind::Io => {
            EXIT_FAILURE
        }
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InsecurePermissions(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::InvalidDataPath(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
