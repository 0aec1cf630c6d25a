//! Execution result types.

use std::process::ExitStatus;
use std::time::Duration;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Normal exit with the given code.
    Exited(i32),
    /// Terminated by an uncaught signal.
    Signaled(i32),
    /// Status carried neither an exit code nor a signal.
    Unknown,
}

impl ExitOutcome {
    /// Only a normal exit with code 0 counts as success.
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return ExitOutcome::Exited(code);
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return ExitOutcome::Signaled(signal);
            }
        }
        ExitOutcome::Unknown
    }
}

impl std::fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exited(code) => write!(f, "exit code {}", code),
            Self::Signaled(signal) => write!(f, "signal {}", signal),
            Self::Unknown => write!(f, "unknown status"),
        }
    }
}

/// Result of a completed execution.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Child process id.
    pub pid: u32,
    /// How the child ended.
    pub outcome: ExitOutcome,
    /// Time from spawn to observed termination.
    pub duration: Duration,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(pid: u32, outcome: ExitOutcome, duration: Duration) -> Self {
        Self {
            pid,
            outcome,
            duration,
        }
    }

    /// Check if the child exited normally with code 0.
    pub fn success(&self) -> bool {
        self.outcome.success()
    }

    /// Exit code, if the child exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self.outcome {
            ExitOutcome::Exited(code) => Some(code),
            _ => None,
        }
    }

    /// Signal number, if the child was killed by one.
    pub fn signal(&self) -> Option<i32> {
        match self.outcome {
            ExitOutcome::Signaled(signal) => Some(signal),
            _ => None,
        }
    }
}
