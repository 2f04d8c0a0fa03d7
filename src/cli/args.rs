//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Cairn - Recent project history for your shell.
#[derive(Debug, Parser)]
#[command(name = "cairn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List recent projects (default if no command specified)
    List(ListArgs),

    /// Record a visit to a project directory
    Add(AddArgs),

    /// Remove a project from the history
    Remove(RemoveArgs),

    /// Delete the entire history
    Clear(ClearArgs),

    /// Print the most recently used project path
    Last,

    /// Drop entries whose directories no longer exist
    Prune,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Show at most this many entries
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AddArgs {
    /// Project directory to record
    pub path: PathBuf,
}

/// Arguments for the `remove` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RemoveArgs {
    /// Project path to remove
    pub path: PathBuf,
}

/// Arguments for the `clear` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
