//! The recent project history store.
//!
//! A bounded, deduplicated recency list of project paths persisted as a
//! JSON array in a single durable slot. Every operation is a synchronous
//! read-modify-write against the backend; there is no caching layer, so
//! each call observes whatever was last durably written.
//!
//! Storage and parse failures never reach the caller: they are logged
//! and the operation degrades to the safest default (empty list for
//! reads, silent no-op for writes).

use chrono::Utc;
use tracing::warn;

use super::backend::StorageBackend;
use super::entry::HistoryEntry;

/// Maximum number of entries kept; oldest by `last_used` evicted first.
pub const MAX_ENTRIES: usize = 10;

/// Persistent recency list of project paths.
pub struct HistoryStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> HistoryStore<B> {
    /// Create a store over the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load all entries, most recently used first.
    ///
    /// Missing or malformed storage yields an empty list.
    pub fn load(&self) -> Vec<HistoryEntry> {
        let contents = match self.backend.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read history from {:?}: {}", self.backend.location(), e);
                return Vec::new();
            }
        };

        let mut entries: Vec<HistoryEntry> = match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Discarding malformed history at {:?}: {}", self.backend.location(), e);
                return Vec::new();
            }
        };

        // Storage order is not meaningful; re-sort on every load.
        entries.sort_by_key(|e| std::cmp::Reverse(e.last_used));
        entries
    }

    /// Record a project visit: insert the path or refresh its timestamp,
    /// moving it to most-recent. Empty or whitespace-only paths are ignored.
    pub fn record(&self, path: &str) {
        self.record_at(path, Utc::now().timestamp_millis());
    }

    fn record_at(&self, path: &str, last_used: i64) {
        if path.trim().is_empty() {
            return;
        }

        let mut entries = self.load();
        entries.retain(|e| e.path != path);
        entries.insert(0, HistoryEntry::new(path, last_used));
        entries.truncate(MAX_ENTRIES);

        self.persist(&entries);
    }

    /// Remove the entry for a path. Absent paths are a no-op.
    pub fn remove(&self, path: &str) {
        let mut entries = self.load();
        entries.retain(|e| e.path != path);
        self.persist(&entries);
    }

    /// Keep only entries for which `keep` returns true.
    ///
    /// Returns the paths that were dropped.
    pub fn retain<F: Fn(&HistoryEntry) -> bool>(&self, keep: F) -> Vec<String> {
        let entries = self.load();
        let (kept, dropped): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| keep(e));
        self.persist(&kept);
        dropped.into_iter().map(|e| e.path).collect()
    }

    /// Delete the entire persisted collection.
    pub fn clear(&self) {
        if let Err(e) = self.backend.delete() {
            warn!("Failed to clear history at {:?}: {}", self.backend.location(), e);
        }
    }

    /// The path of the most recently used project, if any.
    pub fn most_recent(&self) -> Option<String> {
        self.load().into_iter().next().map(|e| e.path)
    }

    /// Where the history is stored, for diagnostics.
    pub fn location(&self) -> std::path::PathBuf {
        self.backend.location()
    }

    fn persist(&self, entries: &[HistoryEntry]) {
        let contents = match serde_json::to_string(entries) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to serialize history: {}", e);
                return;
            }
        };

        // A failed write is simply lost; the next load reflects whatever
        // was last durably written.
        if let Err(e) = self.backend.write(&contents) {
            warn!("Failed to write history to {:?}: {}", self.backend.location(), e);
        }
    }
}
