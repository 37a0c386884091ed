// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug)]
pub enum StorageError {
    Io { path: PathBuf, source: io::Error },
    InvalidKey { key: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::InvalidKey { key } => write!(f, "invalid storage key: {key:?}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidKey { .. } => None,
        }
    }
}

/// Synchronous key-value storage, a single shared slot per key.
///
/// Correctness under concurrent use relies on the studio serializing writes
/// (last write wins after debouncing); the storage itself takes no locks
/// beyond what its own implementation needs.
pub trait ProjectStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("memory storage lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("memory storage lock poisoned");
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("memory storage lock poisoned");
        entries.remove(key);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to
    /// stable storage where possible. Exact guarantees are platform and
    /// filesystem dependent.
    Durable,
}

/// File-backed storage: one `<key>.json` file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
    durability: WriteDurability,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys become file stems; refuse anything that could escape the root.
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains('/')
            || key.contains('\\')
        {
            return Err(StorageError::InvalidKey {
                key: key.to_owned(),
            });
        }
        Ok(self.root.join(format!("{key}.json")))
    }

    fn write_atomic(&self, path: &Path, contents: &[u8]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|source| StorageError::Io {
            path: self.root.clone(),
            source,
        })?;

        let Some(file_name) = path.file_name() else {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source: io::Error::other("path has no file name"),
            });
        };

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp_path = self.root.join(format!(
            ".galatea.tmp.{}.{}",
            file_name.to_string_lossy(),
            nanos
        ));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .map_err(|source| StorageError::Io {
                path: tmp_path.clone(),
                source,
            })?;

        file.write_all(contents).map_err(|source| StorageError::Io {
            path: tmp_path.clone(),
            source,
        })?;

        if self.durability == WriteDurability::Durable {
            file.sync_all().map_err(|source| StorageError::Io {
                path: tmp_path.clone(),
                source,
            })?;
        }
        drop(file);

        fs::rename(&tmp_path, path).map_err(|source| {
            let _ = fs::remove_file(&tmp_path);
            StorageError::Io {
                path: path.to_path_buf(),
                source,
            }
        })
    }
}

impl ProjectStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        self.write_atomic(&path, value.as_bytes())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    use rstest::{fixture, rstest};

    use super::{FileStorage, MemoryStorage, ProjectStorage, StorageError, WriteDurability};

    static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    struct TempDir {
        path: std::path::PathBuf,
    }

    impl TempDir {
        fn new(prefix: &str) -> Self {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos();
            let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
            let mut path = env::temp_dir();
            path.push(format!(
                "galatea-{prefix}-{}-{nanos}-{counter}",
                std::process::id()
            ));
            std::fs::create_dir_all(&path).unwrap();
            Self { path }
        }

        fn path(&self) -> &std::path::Path {
            &self.path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.path);
        }
    }

    #[fixture]
    fn tmp() -> TempDir {
        TempDir::new("storage")
    }

    #[rstest]
    fn file_storage_round_trips_a_slot(tmp: TempDir) {
        let storage = FileStorage::new(tmp.path().join("store"));

        assert_eq!(storage.get("project").unwrap(), None);

        storage.set("project", "{\"files\":[]}").unwrap();
        assert_eq!(
            storage.get("project").unwrap().as_deref(),
            Some("{\"files\":[]}")
        );

        storage.set("project", "{}").unwrap();
        assert_eq!(storage.get("project").unwrap().as_deref(), Some("{}"));

        storage.remove("project").unwrap();
        assert_eq!(storage.get("project").unwrap(), None);
    }

    #[rstest]
    fn file_storage_remove_on_missing_slot_is_ok(tmp: TempDir) {
        let storage = FileStorage::new(tmp.path().join("store"));
        storage.remove("never-written").unwrap();
    }

    #[rstest]
    fn file_storage_leaves_no_temp_files_behind(tmp: TempDir) {
        let root = tmp.path().join("store");
        let storage = FileStorage::new(&root).with_durability(WriteDurability::Durable);
        storage.set("project", "payload").unwrap();

        let names: Vec<String> = std::fs::read_dir(&root)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["project.json"]);
    }

    #[rstest]
    #[case("")]
    #[case(".")]
    #[case("..")]
    #[case("a/b")]
    #[case("a\\b")]
    fn file_storage_rejects_path_escaping_keys(tmp: TempDir, #[case] key: &str) {
        let storage = FileStorage::new(tmp.path().join("store"));
        let err = storage.set(key, "x").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey { .. }));
    }

    #[test]
    fn memory_storage_round_trips_a_slot() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }
}
