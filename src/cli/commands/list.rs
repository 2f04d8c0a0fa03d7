//! List command implementation.
//!
//! The `cairn list` command shows recent projects, most recent first.

use crate::cli::args::ListArgs;
use crate::error::{CairnError, Result};
use crate::history::{HistoryStore, StorageBackend, MAX_ENTRIES};
use crate::ui::{display_path, format_relative_time, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<B: StorageBackend> {
    store: HistoryStore<B>,
    args: ListArgs,
}

impl<B: StorageBackend> ListCommand<B> {
    /// Create a new list command.
    pub fn new(store: HistoryStore<B>, args: ListArgs) -> Self {
        Self { store, args }
    }
}

impl<B: StorageBackend> Command for ListCommand<B> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut entries = self.store.load();
        entries.truncate(self.args.limit.unwrap_or(MAX_ENTRIES));

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(|e| {
                CairnError::HistorySerializeError {
                    message: e.to_string(),
                }
            })?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        if entries.is_empty() {
            ui.message("No recent projects.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Recent Projects");

        for entry in &entries {
            ui.message(&format!(
                "  {:<24} {:<48} {}",
                entry.name,
                display_path(&entry.path),
                format_relative_time(entry.last_used),
            ));
        }

        Ok(CommandResult::success())
    }
}
