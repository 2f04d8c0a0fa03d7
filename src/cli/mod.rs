//! Command-line interface.
//!
//! This module provides argument parsing ([`args`]) and the command
//! implementations ([`commands`]).

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::{Command, CommandDispatcher, CommandResult};
