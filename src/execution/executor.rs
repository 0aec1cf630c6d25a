//! Command execution engine.

use std::fs::File;
use std::path::Path;
use std::process::Stdio;
use std::time::Instant;

use tracing::{debug, warn};

use super::command::{Argv, ShellCommand};
use super::phase::ExecutionPhase;
use super::result::{ExecutionResult, ExitOutcome};
use crate::error::ExecError;
use crate::Result;

/// Run a command line through the platform interpreter.
///
/// Returns true only if the interpreter started and the command exited
/// with code 0. The caller's standard streams are inherited.
pub fn shell_execute(command: &str) -> bool {
    collapse("shell", try_shell_execute(command))
}

/// Like [`shell_execute`] with an explicit interpreter.
pub fn shell_execute_with(command: &ShellCommand) -> bool {
    collapse("shell", try_shell_execute_with(command))
}

/// Run a command line through the platform interpreter, reporting detail.
pub fn try_shell_execute(command: &str) -> Result<ExecutionResult> {
    try_shell_execute_with(&ShellCommand::new(command))
}

/// Like [`try_shell_execute`] with an explicit interpreter.
pub fn try_shell_execute_with(command: &ShellCommand) -> Result<ExecutionResult> {
    debug!(shell = %command.shell.program, command = %command.command_line, "shell execute");
    run_to_completion(&command.shell.program, command.to_std_command())
}

/// Spawn `argv[0]` with `argv` as its argument vector and wait for it.
///
/// `argv[0]` must be an absolute path. Returns true iff the child exited
/// normally with code 0.
pub fn process_execute<S: AsRef<str>>(argv: &[S]) -> bool {
    collapse("exec", try_process_execute(argv))
}

/// Spawn and wait, reporting detail.
pub fn try_process_execute<S: AsRef<str>>(argv: &[S]) -> Result<ExecutionResult> {
    let argv = Argv::new(argv)?;
    debug!(program = %argv.program(), args = ?argv.args(), "process execute");
    run_to_completion(argv.program(), argv.to_std_command())
}

/// Spawn and wait with the child's stdout bound to `output_file`.
///
/// The file is created if absent and truncated if present. If it cannot be
/// opened no process is created and the result is false.
pub fn process_execute_redirected<P, S>(output_file: P, argv: &[S]) -> bool
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    collapse("exec-redirect", try_process_execute_redirected(output_file, argv))
}

/// Spawn with stdout redirected and wait, reporting detail.
pub fn try_process_execute_redirected<P, S>(output_file: P, argv: &[S]) -> Result<ExecutionResult>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let argv = Argv::new(argv)?;
    let stdout = open_output(output_file.as_ref())?;
    debug!(
        program = %argv.program(),
        args = ?argv.args(),
        output = %output_file.as_ref().display(),
        "process execute redirected"
    );

    let mut cmd = argv.to_std_command();
    cmd.stdout(stdout);
    run_to_completion(argv.program(), cmd)
}

/// Async form of [`shell_execute`].
pub async fn shell_execute_async(command: &str) -> bool {
    collapse("shell", try_shell_execute_async(command).await)
}

/// Async form of [`try_shell_execute`].
pub async fn try_shell_execute_async(command: &str) -> Result<ExecutionResult> {
    let command = ShellCommand::new(command);
    debug!(shell = %command.shell.program, command = %command.command_line, "shell execute");
    run_to_completion_async(&command.shell.program, command.to_tokio_command()).await
}

/// Async form of [`process_execute`].
pub async fn process_execute_async<S: AsRef<str>>(argv: &[S]) -> bool {
    collapse("exec", try_process_execute_async(argv).await)
}

/// Async form of [`try_process_execute`].
pub async fn try_process_execute_async<S: AsRef<str>>(argv: &[S]) -> Result<ExecutionResult> {
    let argv = Argv::new(argv)?;
    debug!(program = %argv.program(), args = ?argv.args(), "process execute");
    run_to_completion_async(argv.program(), argv.to_tokio_command()).await
}

/// Async form of [`process_execute_redirected`].
pub async fn process_execute_redirected_async<P, S>(output_file: P, argv: &[S]) -> bool
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    collapse(
        "exec-redirect",
        try_process_execute_redirected_async(output_file, argv).await,
    )
}

/// Async form of [`try_process_execute_redirected`].
pub async fn try_process_execute_redirected_async<P, S>(
    output_file: P,
    argv: &[S],
) -> Result<ExecutionResult>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let argv = Argv::new(argv)?;
    let stdout = open_output(output_file.as_ref())?;
    debug!(
        program = %argv.program(),
        args = ?argv.args(),
        output = %output_file.as_ref().display(),
        "process execute redirected"
    );

    let mut cmd = argv.to_tokio_command();
    cmd.stdout(stdout);
    run_to_completion_async(argv.program(), cmd).await
}

/// Open the redirect target: write-only, create, truncate.
fn open_output(path: &Path) -> Result<Stdio> {
    let file = File::create(path).map_err(|source| ExecError::Redirect {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Stdio::from(file))
}

fn run_to_completion(program: &str, mut cmd: std::process::Command) -> Result<ExecutionResult> {
    let mut phase = ExecutionPhase::default();
    phase.transition_to(ExecutionPhase::CreationAttempted)?;

    let start = Instant::now();
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) => {
            phase.transition_to(ExecutionPhase::CreationFailed)?;
            return Err(ExecError::Spawn {
                program: program.to_owned(),
                source,
            });
        }
    };
    // Releases the parent's copy of any redirected descriptor.
    drop(cmd);
    phase.transition_to(ExecutionPhase::ChildRunning)?;

    let pid = child.id();
    debug!(pid, program, "child spawned");

    let status = child.wait().map_err(ExecError::Wait)?;
    phase.transition_to(ExecutionPhase::ChildTerminated)?;

    evaluate(&mut phase, pid, status.into(), start)
}

async fn run_to_completion_async(
    program: &str,
    mut cmd: tokio::process::Command,
) -> Result<ExecutionResult> {
    let mut phase = ExecutionPhase::default();
    phase.transition_to(ExecutionPhase::CreationAttempted)?;

    let start = Instant::now();
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(source) => {
            phase.transition_to(ExecutionPhase::CreationFailed)?;
            return Err(ExecError::Spawn {
                program: program.to_owned(),
                source,
            });
        }
    };
    drop(cmd);
    phase.transition_to(ExecutionPhase::ChildRunning)?;

    // id() is only None once the child has been reaped.
    let pid = child.id().unwrap_or_default();
    debug!(pid, program, "child spawned");

    let status = child.wait().await.map_err(ExecError::Wait)?;
    phase.transition_to(ExecutionPhase::ChildTerminated)?;

    evaluate(&mut phase, pid, status.into(), start)
}

fn evaluate(
    phase: &mut ExecutionPhase,
    pid: u32,
    outcome: ExitOutcome,
    start: Instant,
) -> Result<ExecutionResult> {
    let result = ExecutionResult::new(pid, outcome, start.elapsed());
    phase.transition_to(ExecutionPhase::Evaluated)?;
    debug!(
        pid,
        outcome = %result.outcome,
        elapsed_ms = result.duration.as_millis() as u64,
        "child terminated"
    );
    Ok(result)
}

/// Fold a detailed result into the boolean contract, logging what is lost.
fn collapse(op: &'static str, result: Result<ExecutionResult>) -> bool {
    match result {
        Ok(result) if result.success() => true,
        Ok(result) => {
            warn!(op, pid = result.pid, outcome = %result.outcome, "command did not succeed");
            false
        }
        Err(e) => {
            warn!(op, error = %e, "command could not be run");
            false
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_true_and_false() {
        assert!(process_execute(&["/bin/true"]));
        assert!(!process_execute(&["/bin/false"]));
    }

    #[test]
    fn test_exit_code_reported() {
        let result = try_process_execute(&["/bin/sh", "-c", "exit 7"]).unwrap();
        assert_eq!(result.exit_code(), Some(7));
        assert!(!result.success());
        assert!(result.pid > 0);
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let result = try_process_execute(&["/nonexistent/program"]);
        assert!(matches!(result, Err(ExecError::Spawn { .. })));
        assert!(!process_execute(&["/nonexistent/program"]));
    }

    #[test]
    fn test_relative_path_rejected() {
        let result = try_process_execute(&["true"]);
        assert!(matches!(result, Err(ExecError::RelativePath(_))));
        assert!(!process_execute(&["true"]));
    }

    #[test]
    fn test_signal_is_failure() {
        let result = try_process_execute(&["/bin/sh", "-c", "kill -TERM $$"]).unwrap();
        assert_eq!(result.signal(), Some(15));
        assert!(!result.success());
    }

    #[test]
    fn test_shell_exit_codes() {
        assert!(shell_execute("exit 0"));
        assert!(!shell_execute("exit 1"));
        assert!(shell_execute("true && true"));
        assert!(!shell_execute("true && false"));
    }

    #[test]
    fn test_shell_missing_interpreter() {
        let cmd = ShellCommand::new("true").shell(crate::config::ShellConfig {
            program: "/nonexistent/sh".into(),
            flag: "-c".into(),
        });
        assert!(!shell_execute_with(&cmd));
    }

    #[test]
    fn test_redirect_bad_directory() {
        let result =
            try_process_execute_redirected("/nonexistent-dir/out.txt", &["/bin/echo", "hi"]);
        assert!(matches!(result, Err(ExecError::Redirect { .. })));
    }

    #[test]
    fn test_collapse_logs_and_folds() {
        let ok = ExecutionResult::new(1, ExitOutcome::Exited(0), std::time::Duration::ZERO);
        let bad = ExecutionResult::new(1, ExitOutcome::Exited(2), std::time::Duration::ZERO);
        assert!(collapse("test", Ok(ok)));
        assert!(!collapse("test", Ok(bad)));
        assert!(!collapse("test", Err(ExecError::EmptyArgv)));
    }
}
