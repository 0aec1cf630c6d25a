//! # execkit
//!
//! Blocking helpers for running external commands from a host process.
//!
//! Three operations, each answering a single question: did the command run
//! and exit with code 0?
//!
//! - [`shell_execute`]: hand a command line to the platform interpreter
//! - [`process_execute`]: run an absolute path with an argument vector
//! - [`process_execute_redirected`]: as above, with stdout sent to a file
//!
//! Every boolean operation has a `try_` form returning an
//! [`ExecutionResult`] (exit code, signal, pid, duration) or an
//! [`ExecError`], and async forms for tokio callers.
//!
//! ## Quick Start
//!
//! ```no_run
//! use execkit::{process_execute, process_execute_redirected, shell_execute};
//!
//! execkit::logging::try_init().ok();
//!
//! assert!(shell_execute("exit 0"));
//! assert!(process_execute(&["/bin/true"]));
//! assert!(!process_execute(&["/bin/false"]));
//!
//! // /tmp/out.txt now contains "hello\n"
//! assert!(process_execute_redirected("/tmp/out.txt", &["/bin/echo", "hello"]));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod execution;
pub mod logging;

// Re-export commonly used types
pub use config::{Config, ShellConfig};
pub use error::{ExecError, Result};
pub use execution::{
    process_execute, process_execute_async, process_execute_redirected,
    process_execute_redirected_async, shell_execute, shell_execute_async, try_process_execute,
    try_process_execute_redirected, try_shell_execute, Argv, ExecutionPhase, ExecutionResult,
    ExitOutcome, ShellCommand,
};
