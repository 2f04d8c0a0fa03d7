//! History entries.
//!
//! This module provides [`HistoryEntry`], one recorded project path with
//! its display name and last-used time.

use serde::{Deserialize, Serialize};

/// Display name used when a path has no usable segments (e.g. `/` or "").
pub const FALLBACK_NAME: &str = "Unknown Project";

/// One recorded project path.
///
/// Entries are keyed by `path`: recording the same path again refreshes
/// `last_used` instead of duplicating. The serialized form uses camelCase
/// field names (`path`, `name`, `lastUsed`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Absolute project path, unique within the store.
    pub path: String,

    /// Display name derived from the path.
    pub name: String,

    /// Last-used timestamp in milliseconds since epoch.
    pub last_used: i64,
}

impl HistoryEntry {
    /// Create an entry for a path, deriving its display name.
    pub fn new(path: &str, last_used: i64) -> Self {
        Self {
            path: path.to_string(),
            name: derive_name(path),
            last_used,
        }
    }
}

/// Derive a display name from a project path.
///
/// Takes the last non-empty path segment, splitting on both `/` and `\`
/// so Windows-style paths recorded on another machine still render.
/// Paths with no segments (root, empty) fall back to [`FALLBACK_NAME`].
pub fn derive_name(path: &str) -> String {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .next_back()
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_name_takes_last_segment() {
        assert_eq!(derive_name("/Users/alice/projects/demo"), "demo");
    }

    #[test]
    fn derive_name_ignores_trailing_separator() {
        assert_eq!(derive_name("/Users/alice/projects/demo/"), "demo");
    }

    #[test]
    fn derive_name_handles_windows_paths() {
        assert_eq!(derive_name(r"C:\Users\bob\dev\widget"), "widget");
    }

    #[test]
    fn derive_name_root_falls_back() {
        assert_eq!(derive_name("/"), FALLBACK_NAME);
    }

    #[test]
    fn derive_name_empty_falls_back() {
        assert_eq!(derive_name(""), FALLBACK_NAME);
    }

    #[test]
    fn entry_new_derives_name() {
        let entry = HistoryEntry::new("/home/alice/src/cairn", 1_000);
        assert_eq!(entry.name, "cairn");
        assert_eq!(entry.last_used, 1_000);
    }

    #[test]
    fn entry_serializes_camel_case() {
        let entry = HistoryEntry::new("/home/alice/src/cairn", 42);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"lastUsed\":42"));
        assert!(json.contains("\"name\":\"cairn\""));
    }

    #[test]
    fn entry_round_trips() {
        let entry = HistoryEntry::new("/home/alice/src/cairn", 42);
        let json = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
