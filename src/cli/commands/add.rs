//! Add command implementation.
//!
//! The `cairn add` command records a visit to a project directory.

use std::fs;

use crate::cli::args::AddArgs;
use crate::error::{CairnError, Result};
use crate::history::{HistoryStore, StorageBackend};
use crate::ui::{display_path, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The add command implementation.
pub struct AddCommand<B: StorageBackend> {
    store: HistoryStore<B>,
    args: AddArgs,
}

impl<B: StorageBackend> AddCommand<B> {
    /// Create a new add command.
    pub fn new(store: HistoryStore<B>, args: AddArgs) -> Self {
        Self { store, args }
    }
}

impl<B: StorageBackend> Command for AddCommand<B> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let abs = fs::canonicalize(&self.args.path).map_err(|_| {
            CairnError::InvalidProjectPath {
                path: self.args.path.clone(),
            }
        })?;

        if !abs.is_dir() {
            return Err(CairnError::InvalidProjectPath { path: abs });
        }

        let path = abs.to_string_lossy();
        self.store.record(&path);

        ui.success(&format!("Recorded {}", display_path(&path)));
        Ok(CommandResult::success())
    }
}
