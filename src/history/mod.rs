//! Recent project history.
//!
//! This module provides the persistent recency list of project paths:
//! the [`HistoryStore`], its [`StorageBackend`] abstraction, and the
//! [`HistoryEntry`] record type.

pub mod backend;
pub mod entry;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use entry::{derive_name, HistoryEntry, FALLBACK_NAME};
pub use store::{HistoryStore, MAX_ENTRIES};

/// Open the history store over the default file backend.
pub fn open_default() -> HistoryStore<FileBackend> {
    HistoryStore::new(FileBackend::new())
}
