pub mod error;
pub mod paths;
pub mod snapshot;

use crate::error::Result;
use addrbook_core::AddressBook;
use std::path::{Path, PathBuf};

/// Snapshot file backing one address book.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<AddressBook> {
        snapshot::load(&self.path)
    }

    pub fn save(&self, book: &AddressBook) -> Result<()> {
        snapshot::save(book, &self.path)
    }
}
