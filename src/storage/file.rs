//! File-backed storage.
//!
//! Every key lives in one JSON object on disk:
//!
//! ```text
//! ~/.svlt/
//! ├── storage.json    # {"svlt_videos": "[...]", "svlt_current_video": "abc", ...}
//! └── storage.lock    # exclusive lock held for each operation
//! ```
//!
//! Values are stored as the raw strings handed to `set`, so the file holds
//! exactly what a browser origin's storage would.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use super::{KeyValueStore, StorageFault};

type Entries = BTreeMap<String, String>;

/// JSON-file storage with per-operation locking and atomic replacement
#[derive(Debug, Clone)]
pub struct FileStorage {
    /// Path to the JSON file
    path: PathBuf,

    /// Sibling lock file
    lock_path: PathBuf,
}

impl FileStorage {
    /// Storage at `path`; the file is created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let lock_path = path.with_extension("lock");
        Self { path, lock_path }
    }

    /// Open the storage file from the resolved configuration
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::config::storage_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Run `op` while holding the exclusive lock
    fn locked<T>(&self, op: impl FnOnce() -> Result<T, StorageFault>) -> Result<T, StorageFault> {
        fs::create_dir_all(self.parent_dir())?;

        let lock = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(false)
            .open(&self.lock_path)?;
        lock.lock_exclusive().map_err(|e| {
            StorageFault::Lock(format!("{}: {}", self.lock_path.display(), e))
        })?;

        // Lock is released when `lock` is dropped
        op()
    }

    /// Current map on disk.
    ///
    /// A missing or blank file is empty. A file that does not decode as a
    /// string map is also read as empty with a warning, and the next write
    /// replaces it.
    fn read_entries(&self) -> Result<Entries, StorageFault> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        match serde_json::from_str(&content) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt storage file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Entries::new())
            }
        }
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), StorageFault> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| StorageFault::Io(e.error))?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageFault> {
        self.locked(|| Ok(self.read_entries()?.remove(key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageFault> {
        self.locked(|| {
            let mut entries = self.read_entries()?;
            entries.insert(key.to_string(), value.to_string());
            self.write_entries(&entries)
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageFault> {
        self.locked(|| {
            let mut entries = self.read_entries()?;
            if entries.remove(key).is_some() {
                self.write_entries(&entries)?;
            }
            Ok(())
        })
    }
}
