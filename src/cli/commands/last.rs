//! Last command implementation.
//!
//! The `cairn last` command prints the most recently used project path
//! bare, so shells can do `cd "$(cairn last)"`. Exits non-zero when the
//! history is empty.

use crate::error::Result;
use crate::history::{HistoryStore, StorageBackend};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The last command implementation.
pub struct LastCommand<B: StorageBackend> {
    store: HistoryStore<B>,
}

impl<B: StorageBackend> LastCommand<B> {
    /// Create a new last command.
    pub fn new(store: HistoryStore<B>) -> Self {
        Self { store }
    }
}

impl<B: StorageBackend> Command for LastCommand<B> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match self.store.most_recent() {
            Some(path) => {
                ui.message(&path);
                Ok(CommandResult::success())
            }
            None => {
                ui.error("No recent projects.");
                Ok(CommandResult::failure(1))
            }
        }
    }
}
