use crate::error::{Result, StoreError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "addrbook";
const DATA_FILENAME: &str = "addressbook.json";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn data_path() -> Result<PathBuf> {
    Ok(data_path_in(&ensure_data_dir()?))
}

pub fn data_path_in(dir: &Path) -> PathBuf {
    dir.join(DATA_FILENAME)
}

pub fn resolve_data_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(StoreError::InvalidDataPath(path));
            }
            Ok(path)
        }
        None => data_path(),
    }
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{data_path_in, ensure_parent_dir, resolve_data_path};
    use crate::error::StoreErrorKind;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn resolve_data_path_prefers_custom_path() {
        let custom = PathBuf::from("/tmp/contacts.json");
        assert_eq!(resolve_data_path(Some(custom.clone())).unwrap(), custom);
    }

    #[test]
    fn resolve_data_path_rejects_empty_custom_path() {
        let err = resolve_data_path(Some(PathBuf::new())).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidDataPath);
    }

    #[test]
    fn data_path_in_uses_default_filename() {
        let temp = TempDir::new().expect("temp dir");
        assert_eq!(
            data_path_in(temp.path()),
            temp.path().join("addressbook.json")
        );
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let temp = TempDir::new().expect("temp dir");
        let nested = temp.path().join("a").join("b").join("book.json");
        ensure_parent_dir(&nested).expect("create parents");
        assert!(temp.path().join("a").join("b").is_dir());
        ensure_parent_dir(&PathBuf::from("book.json")).expect("bare file name");
    }
}
