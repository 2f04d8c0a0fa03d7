//! Storage backends for the history store.
//!
//! The store persists the whole history collection in a single durable
//! slot. [`StorageBackend`] abstracts that slot so the store can be
//! tested without touching the filesystem.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// A single durable slot holding the serialized history collection.
pub trait StorageBackend {
    /// Read the slot. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the slot contents.
    fn write(&self, contents: &str) -> Result<()>;

    /// Delete the slot entirely.
    fn delete(&self) -> Result<()>;

    /// Human-readable location of the slot, for diagnostics.
    fn location(&self) -> PathBuf;
}

/// File-backed storage under the cairn data directory.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// The data directory: `$CAIRN_HOME` if set, otherwise `~/.cairn`.
    pub fn data_dir() -> PathBuf {
        std::env::var_os("CAIRN_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("~"))
                    .join(".cairn")
            })
    }

    /// Backend for the default history file.
    pub fn new() -> Self {
        Self {
            path: Self::data_dir().join("history.json"),
        }
    }

    /// Backend for an explicit file path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBackend for FileBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&self.path)?))
    }

    /// Save using atomic write.
    ///
    /// Uses the write-to-temp-then-rename pattern to prevent corruption
    /// if the process crashes or loses power during the write operation.
    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, contents)?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }

    fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// In-memory storage slot for tests.
///
/// Single-threaded by design: the store runs synchronous read-modify-write
/// sequences on the calling thread.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slot: RefCell<Option<String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with raw contents.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            slot: RefCell::new(Some(contents.to_string())),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        *self.slot.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn delete(&self) -> Result<()> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("<memory>")
    }
}
