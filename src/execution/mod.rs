//! Command execution engine.
//!
//! This module provides three ways to run an external program and wait for
//! it:
//! - through the platform command interpreter
//! - directly, from an absolute path and argument vector
//! - directly, with standard output redirected to a file
//!
//! Each has a boolean form, a `try_` form that keeps the detail, and async
//! forms for callers inside a tokio runtime.
//!
//! # Example
//!
//! ```no_run
//! use execkit::execution::{process_execute, process_execute_redirected, shell_execute};
//!
//! assert!(shell_execute("test -d /tmp"));
//! assert!(process_execute(&["/bin/true"]));
//! assert!(process_execute_redirected("/tmp/out.txt", &["/bin/echo", "hello"]));
//! ```

mod command;
mod executor;
mod phase;
mod result;

pub use command::{Argv, ShellCommand};
pub use executor::{
    process_execute, process_execute_async, process_execute_redirected,
    process_execute_redirected_async, shell_execute, shell_execute_async, shell_execute_with,
    try_process_execute, try_process_execute_async, try_process_execute_redirected,
    try_process_execute_redirected_async, try_shell_execute, try_shell_execute_async,
    try_shell_execute_with,
};
pub use phase::ExecutionPhase;
pub use result::{ExecutionResult, ExitOutcome};
