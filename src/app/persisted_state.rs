// SPDX-License-Identifier: MPL-2.0
//! Durable client-side key/value storage for UI preferences.
//!
//! Values are kept in a CBOR map (`state.cbor`) inside the app data
//! directory, separate from the user-editable `settings.toml`. Every write
//! rewrites the file synchronously.
//!
//! # Path Resolution
//!
//! 1. `open_from()` with an explicit base directory
//! 2. `ICED_SHELL_DATA_DIR` environment variable / `--data-dir`
//! 3. Platform-specific data directory
//!
//! When no directory can be resolved the storage still works in memory but
//! every write reports an error, so callers fall back to ephemeral state.

use super::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Read/write access to the client's durable preference storage.
pub trait PreferenceStorage {
    /// Returns the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Storage backed by a CBOR file in the app data directory.
#[derive(Debug, Clone, Default)]
pub struct FileStorage {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Opens the storage at the default location.
    ///
    /// Returns the storage together with an optional warning. A missing
    /// file is not a warning; an unreadable or corrupt one is, and yields
    /// empty storage.
    pub fn open() -> (Self, Option<String>) {
        Self::open_from(None)
    }

    /// Opens the storage under a custom base directory.
    pub fn open_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let path = Self::state_file_path_with_override(base_dir);

        let Some(file_path) = path.as_ref() else {
            return (
                Self::default(),
                Some("no data directory available, preferences will not persist".to_string()),
            );
        };

        if !file_path.exists() {
            return (
                Self {
                    path,
                    entries: BTreeMap::new(),
                },
                None,
            );
        }

        let (entries, warning) = match Self::read_entries(file_path) {
            Ok(entries) => (entries, None),
            Err(err) => (
                BTreeMap::new(),
                Some(format!("failed to load {}: {}", file_path.display(), err)),
            ),
        };

        (Self { path, entries }, warning)
    }

    /// Location of the backing file, `None` when running ephemeral.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>> {
        let reader = BufReader::new(fs::File::open(path)?);
        Ok(ciborium::from_reader(reader)?)
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Err(Error::Storage("no data directory available".to_string()));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(&self.entries, writer)?;
        Ok(())
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Non-durable storage, used in tests and when no data directory exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
    /// Number of successful writes, for observing write-through behavior.
    pub writes: usize,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_from_empty_directory_returns_empty_storage() {
        let temp_dir = tempdir().expect("create temp dir");

        let (storage, warning) = FileStorage::open_from(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none(), "should not warn for missing file");
        assert!(storage.read("colorMode").is_none());
    }

    #[test]
    fn write_then_reopen_preserves_value() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut storage, _) = FileStorage::open_from(Some(base_dir.clone()));
        storage.write("colorMode", "dark").expect("write should succeed");
        assert!(base_dir.join(STATE_FILE).exists());

        let (reopened, warning) = FileStorage::open_from(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(reopened.read("colorMode").as_deref(), Some("dark"));
    }

    #[test]
    fn later_write_replaces_earlier_one() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (mut storage, _) = FileStorage::open_from(Some(base_dir.clone()));
        storage.write("colorMode", "dark").expect("first write");
        storage.write("colorMode", "light").expect("second write");

        let (reopened, _) = FileStorage::open_from(Some(base_dir));
        assert_eq!(reopened.read("colorMode").as_deref(), Some("light"));
    }

    #[test]
    fn corrupted_file_opens_empty_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join(STATE_FILE), "not valid cbor data").expect("write file");

        let (storage, warning) = FileStorage::open_from(Some(base_dir));
        assert!(warning.is_some(), "should warn about parse error");
        assert!(storage.read("colorMode").is_none());
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        let (mut storage, _) = FileStorage::open_from(Some(nested_dir.clone()));
        storage.write("colorMode", "light").expect("write should succeed");
        assert!(nested_dir.join(STATE_FILE).exists());
    }

    #[test]
    fn pathless_storage_keeps_value_in_memory_but_reports_write_error() {
        let mut storage = FileStorage::default();

        let result = storage.write("colorMode", "dark");
        assert!(matches!(result, Err(Error::Storage(_))));
        assert_eq!(storage.read("colorMode").as_deref(), Some("dark"));
    }

    #[test]
    fn memory_storage_counts_writes() {
        let mut storage = MemoryStorage::with_entry("colorMode", "light");
        assert_eq!(storage.writes, 0);

        storage.write("colorMode", "dark").unwrap();
        storage.write("colorMode", "light").unwrap();
        assert_eq!(storage.writes, 2);
        assert_eq!(storage.read("colorMode").as_deref(), Some("light"));
    }
}
