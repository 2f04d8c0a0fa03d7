//! Clear command implementation.
//!
//! The `cairn clear` command deletes the entire history, with an
//! interactive confirmation unless `--yes` is given.

use crate::cli::args::ClearArgs;
use crate::error::Result;
use crate::history::{HistoryStore, StorageBackend};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clear command implementation.
pub struct ClearCommand<B: StorageBackend> {
    store: HistoryStore<B>,
    args: ClearArgs,
}

impl<B: StorageBackend> ClearCommand<B> {
    /// Create a new clear command.
    pub fn new(store: HistoryStore<B>, args: ClearArgs) -> Self {
        Self { store, args }
    }
}

impl<B: StorageBackend> Command for ClearCommand<B> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let count = self.store.load().len();
        if count == 0 {
            ui.message("History is already empty.");
            return Ok(CommandResult::success());
        }

        if !self.args.yes {
            let label = if count == 1 { "entry" } else { "entries" };
            let question = format!("Remove all {} {}?", count, label);
            if !ui.confirm(&question, false)? {
                ui.message("Aborted.");
                return Ok(CommandResult::success());
            }
        }

        self.store.clear();
        ui.success("History cleared.");
        Ok(CommandResult::success())
    }
}
