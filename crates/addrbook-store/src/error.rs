use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("corrupt address book {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unsupported address book version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: u64 },
    #[error("duplicate contact name in snapshot: {0}")]
    DuplicateName(String),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Encode,
    Corrupt,
    UnsupportedVersion,
    DuplicateName,
    MissingHomeDir,
    InvalidDataPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Encode(_) => StoreErrorKind::Encode,
            StoreError::Corrupt { .. } => StoreErrorKind::Corrupt,
            StoreError::UnsupportedVersion { .. } => StoreErrorKind::UnsupportedVersion,
            StoreError::DuplicateName(_) => StoreErrorKind::DuplicateName,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
        }
    }
}
