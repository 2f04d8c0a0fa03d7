//! Cairn - recent project history for your shell.
//!
//! Cairn keeps a small, bounded list of recently used project
//! directories and makes it easy to jump back to them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`history`] - The persistent recency list and its storage backends
//! - [`ui`] - Terminal output, theming, and display formatting
//!
//! # Example
//!
//! ```
//! use cairn::history::{HistoryStore, MemoryBackend};
//!
//! let store = HistoryStore::new(MemoryBackend::new());
//! store.record("/home/alice/src/demo");
//! assert_eq!(store.most_recent().as_deref(), Some("/home/alice/src/demo"));
//! ```

pub mod cli;
pub mod error;
pub mod history;
pub mod ui;

pub use error::{CairnError, Result};
