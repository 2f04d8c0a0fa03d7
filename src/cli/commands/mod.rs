//! CLI command implementations.
//!
//! Each subcommand lives in its own module and implements the
//! [`Command`] trait from [`dispatcher`].

pub mod add;
pub mod clear;
pub mod completions;
pub mod dispatcher;
pub mod last;
pub mod list;
pub mod prune;
pub mod remove;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
