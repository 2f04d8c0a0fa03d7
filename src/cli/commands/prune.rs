//! Prune command implementation.
//!
//! The `cairn prune` command drops entries whose directories no longer
//! exist on disk.

use std::path::Path;

use crate::error::Result;
use crate::history::{HistoryStore, StorageBackend};
use crate::ui::{display_path, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The prune command implementation.
pub struct PruneCommand<B: StorageBackend> {
    store: HistoryStore<B>,
}

impl<B: StorageBackend> PruneCommand<B> {
    /// Create a new prune command.
    pub fn new(store: HistoryStore<B>) -> Self {
        Self { store }
    }
}

impl<B: StorageBackend> Command for PruneCommand<B> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let dropped = self.store.retain(|e| Path::new(&e.path).exists());

        if dropped.is_empty() {
            ui.message("Nothing to prune.");
            return Ok(CommandResult::success());
        }

        for path in &dropped {
            ui.message(&format!("  Pruned {}", display_path(path)));
        }

        let label = if dropped.len() == 1 { "entry" } else { "entries" };
        ui.success(&format!("Pruned {} {}.", dropped.len(), label));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryBackend;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn prune_keeps_existing_directories() {
        let temp = TempDir::new().unwrap();
        let store = HistoryStore::new(MemoryBackend::new());
        store.record(&temp.path().to_string_lossy());

        let cmd = PruneCommand::new(store);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("Nothing to prune."));
        assert_eq!(cmd.store.load().len(), 1);
    }

    #[test]
    fn prune_drops_missing_directories() {
        let temp = TempDir::new().unwrap();
        let store = HistoryStore::new(MemoryBackend::new());
        store.record(&temp.path().to_string_lossy());
        store.record("/definitely/not/a/real/dir");

        let cmd = PruneCommand::new(store);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Pruned 1 entry."));
        assert_eq!(cmd.store.load().len(), 1);
    }

    #[test]
    fn prune_empty_history_is_noop() {
        let cmd = PruneCommand::new(HistoryStore::new(MemoryBackend::new()));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("Nothing to prune."));
    }
}
