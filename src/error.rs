//! Error types for cairn operations.
//!
//! This module defines [`CairnError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CairnError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CairnError::Other`) for unexpected errors
//! - History store operations never surface these to callers: storage
//!   failures are logged and degrade to "no history" (see `history::store`)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for cairn operations.
#[derive(Debug, Error)]
pub enum CairnError {
    /// Persisted history could not be parsed.
    #[error("Failed to parse history at {path}: {message}")]
    HistoryParseError { path: PathBuf, message: String },

    /// History could not be serialized for writing.
    #[error("Failed to serialize history: {message}")]
    HistorySerializeError { message: String },

    /// A project path given on the command line does not resolve.
    #[error("Not a directory: {path}")]
    InvalidProjectPath { path: PathBuf },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for cairn operations.
pub type Result<T> = std::result::Result<T, CairnError>;
