//! Error types for execkit.

use std::path::PathBuf;

use thiserror::Error;

use crate::execution::ExecutionPhase;

/// Main error type for command execution.
///
/// A child that runs and exits non-zero (or is killed by a signal) is not an
/// error; it is reported through [`crate::ExecutionResult`].
#[derive(Error, Debug)]
pub enum ExecError {
    /// Argument vector has no program element.
    #[error("argument vector is empty")]
    EmptyArgv,

    /// Program path is not absolute; no PATH search is performed.
    #[error("program path must be absolute: {0}")]
    RelativePath(String),

    /// An argument contains an interior NUL byte.
    #[error("argument {index} contains a NUL byte")]
    NulByte { index: usize },

    /// Process creation or image replacement failed.
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the child failed.
    #[error("failed to wait for child: {0}")]
    Wait(#[source] std::io::Error),

    /// Output file could not be opened for writing.
    #[error("failed to open output file {}: {source}", .path.display())]
    Redirect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid execution phase transition attempted.
    #[error("invalid phase transition from {from:?} to {to:?}")]
    InvalidTransition {
        from: ExecutionPhase,
        to: ExecutionPhase,
    },
}

/// Convenience Result type for execkit operations.
pub type Result<T> = std::result::Result<T, ExecError>;
