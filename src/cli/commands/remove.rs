//! Remove command implementation.
//!
//! The `cairn remove` command drops one project from the history.

use std::fs;

use crate::cli::args::RemoveArgs;
use crate::error::Result;
use crate::history::{HistoryStore, StorageBackend};
use crate::ui::{display_path, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The remove command implementation.
pub struct RemoveCommand<B: StorageBackend> {
    store: HistoryStore<B>,
    args: RemoveArgs,
}

impl<B: StorageBackend> RemoveCommand<B> {
    /// Create a new remove command.
    pub fn new(store: HistoryStore<B>, args: RemoveArgs) -> Self {
        Self { store, args }
    }
}

impl<B: StorageBackend> Command for RemoveCommand<B> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Entries are stored canonicalized; match the same form when the
        // directory still exists, and the raw argument when it doesn't.
        let target = fs::canonicalize(&self.args.path)
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|_| self.args.path.to_string_lossy().into_owned());

        let present = self.store.load().iter().any(|e| e.path == target);
        self.store.remove(&target);

        if present {
            ui.success(&format!("Removed {}", display_path(&target)));
        } else {
            ui.message(&format!("Not in history: {}", display_path(&target)));
        }

        Ok(CommandResult::success())
    }
}
