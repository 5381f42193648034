//! Versioned JSON snapshot of a whole address book.
//!
//! The file is `{"version": 1, "records": [...]}` with records in display
//! order. The version is read before the records so a newer layout is
//! reported as unsupported rather than corrupt.

use crate::error::{Result, StoreError};
use crate::paths;
use addrbook_core::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

pub const SNAPSHOT_VERSION: u64 = 1;

#[derive(Debug, Serialize)]
struct SnapshotOut<'a> {
    version: u64,
    records: Vec<&'a Record>,
}

#[derive(Debug, Deserialize)]
struct SnapshotHeader {
    version: u64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotIn {
    #[allow(dead_code)]
    version: u64,
    records: Vec<Record>,
}

/// Reads the snapshot at `path`; a missing file yields an empty book.
pub fn load(path: &Path) -> Result<AddressBook> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AddressBook::new()),
        Err(err) => return Err(err.into()),
    };
    decode(&bytes, path)
}

pub fn save(book: &AddressBook, path: &Path) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let bytes = encode(book)?;
    let tmp = temp_path(path)?;
    if let Err(err) = write_private(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err.into());
    }
    Ok(())
}

pub fn encode(book: &AddressBook) -> Result<Vec<u8>> {
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        records: book.records().collect(),
    };
    let mut bytes = serde_json::to_vec_pretty(&snapshot).map_err(StoreError::Encode)?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn decode(bytes: &[u8], path: &Path) -> Result<AddressBook> {
    let corrupt = |source: serde_json::Error| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    };

    let header: SnapshotHeader = serde_json::from_slice(bytes).map_err(corrupt)?;
    if header.version != SNAPSHOT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            path: path.to_path_buf(),
            version: header.version,
        });
    }

    let snapshot: SnapshotIn = serde_json::from_slice(bytes).map_err(corrupt)?;
    let mut book = AddressBook::new();
    for record in snapshot.records {
        let name = record.name().as_str().to_string();
        if book.add_record(record).is_some() {
            return Err(StoreError::DuplicateName(name));
        }
    }
    Ok(book)
}

fn temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| StoreError::InvalidDataPath(path.to_path_buf()))?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// Creates `path` owner-only from the start, so the contents are never
/// readable by others between the write and a later chmod.
fn write_private(path: &Path, bytes: &[u8]) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(err.into()),
    }
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, temp_path, write_private};
    use crate::error::StoreErrorKind;
    use addrbook_core::{AddressBook, Name, Record};
    use std::path::Path;

    #[test]
    fn encode_writes_version_and_records_in_order() {
        let mut book = AddressBook::new();
        let mut john = Record::new(Name::new("John").unwrap());
        john.add_phone("1234567890").unwrap();
        john.add_birthday("05.03.1990").unwrap();
        book.add_record(john);
        book.add_record(Record::new(Name::new("Jane").unwrap()));

        let bytes = encode(&book).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["records"][0]["name"], "John");
        assert_eq!(value["records"][0]["phones"][0], "1234567890");
        assert_eq!(value["records"][0]["birthday"], "05.03.1990");
        assert_eq!(value["records"][1]["name"], "Jane");
        assert!(value["records"][1]["birthday"].is_null());
    }

    #[test]
    fn decode_rejects_invalid_phone() {
        let raw = br#"{"version":1,"records":[{"name":"John","phones":["123"],"birthday":null}]}"#;
        let err = decode(raw, Path::new("book.json")).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Corrupt);
    }

    #[test]
    fn decode_rejects_missing_version() {
        let err = decode(br#"{"records":[]}"#, Path::new("book.json")).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Corrupt);
    }

    #[test]
    fn decode_rejects_unknown_record_fields() {
        let raw = br#"{"version":1,"records":[{"name":"John","phones":[],"email":"x"}]}"#;
        let err = decode(raw, Path::new("book.json")).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::Corrupt);
    }

    #[cfg(unix)]
    #[test]
    fn write_private_replaces_loose_stale_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join(".book.json.tmp");
        std::fs::write(&path, b"stale").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        write_private(&path, b"fresh").unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(std::fs::read(&path).unwrap(), b"fresh");
    }

    #[test]
    fn temp_path_is_hidden_sibling() {
        let tmp = temp_path(Path::new("/data/addressbook.json")).unwrap();
        assert_eq!(tmp, Path::new("/data/.addressbook.json.tmp"));
        assert!(temp_path(Path::new("/")).is_err());
    }
}
