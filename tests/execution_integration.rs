//! Execution integration tests.
//!
//! These tests run real programs from /bin and check the boolean contract
//! of each operation.

#![cfg(unix)]

use std::fs;

use tempfile::TempDir;

use execkit::execution::{
    process_execute, process_execute_async, process_execute_redirected,
    process_execute_redirected_async, shell_execute, shell_execute_async, try_process_execute,
    try_process_execute_redirected,
};
use execkit::ExecError;

// ============================================================================
// Shell Execute Tests
// ============================================================================

#[test]
fn test_shell_success_and_failure() {
    assert!(shell_execute("true"));
    assert!(!shell_execute("false"));
    assert!(!shell_execute("exit 42"));
}

#[test]
fn test_shell_interprets_command_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("piped.txt");

    let command = format!("echo one two | tr ' ' '\\n' > '{}'", path.display());
    assert!(shell_execute(&command));
    assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
}

#[test]
fn test_shell_unknown_command() {
    assert!(!shell_execute("this-command-does-not-exist-execkit"));
}

#[test]
fn test_shell_killed_by_signal() {
    assert!(!shell_execute("kill -KILL $$"));
}

// ============================================================================
// Process Execute Tests
// ============================================================================

#[test]
fn test_bin_true_and_false() {
    assert!(process_execute(&["/bin/true"]));
    assert!(!process_execute(&["/bin/false"]));
}

#[test]
fn test_exit_code_matches_program() {
    for code in [0, 1, 2, 127, 255] {
        let script = format!("exit {}", code);
        let result = try_process_execute(&["/bin/sh", "-c", script.as_str()]).unwrap();
        assert_eq!(result.exit_code(), Some(code));
        assert_eq!(result.success(), code == 0);
    }
}

#[test]
fn test_nonexistent_path_returns_false() {
    assert!(!process_execute(&["/nonexistent/execkit/program", "arg"]));
    // Caller keeps running normally afterwards
    assert!(process_execute(&["/bin/true"]));
}

#[test]
fn test_not_executable_returns_false() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.txt");
    fs::write(&path, "not a program").unwrap();

    let path = path.to_str().unwrap();
    let result = try_process_execute(&[path]);
    assert!(matches!(result, Err(ExecError::Spawn { .. })));
    assert!(!process_execute(&[path]));
}

#[test]
fn test_signal_termination_returns_false() {
    assert!(!process_execute(&["/bin/sh", "-c", "kill -KILL $$"]));

    let result = try_process_execute(&["/bin/sh", "-c", "kill -KILL $$"]).unwrap();
    assert_eq!(result.signal(), Some(9));
    assert_eq!(result.exit_code(), None);
}

#[test]
fn test_arguments_passed_unmodified() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("args.txt");

    // Positional arguments reach the program as-is: no splitting, no expansion
    assert!(process_execute_redirected(
        &out,
        &["/bin/sh", "-c", "printf '%s|' \"$@\"", "sh", "a b", "*", "$HOME"]
    ));
    assert_eq!(fs::read_to_string(&out).unwrap(), "a b|*|$HOME|");
}

// ============================================================================
// Process Execute Redirected Tests
// ============================================================================

#[test]
fn test_redirect_echo_hello() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");
    assert!(!out.exists());

    assert!(process_execute_redirected(&out, &["/bin/echo", "hello"]));
    assert_eq!(fs::read_to_string(&out).unwrap(), "hello\n");
}

#[test]
fn test_redirect_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");
    fs::write(&out, "old content that is much longer than the new one\n").unwrap();

    assert!(process_execute_redirected(&out, &["/bin/echo", "new"]));
    assert_eq!(fs::read_to_string(&out).unwrap(), "new\n");
}

#[test]
fn test_redirect_reports_program_exit_status() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");

    let ok = process_execute_redirected(&out, &["/bin/sh", "-c", "echo partial; exit 3"]);
    assert!(!ok);
    // File is still created and holds what was written
    assert_eq!(fs::read_to_string(&out).unwrap(), "partial\n");
}

#[test]
fn test_redirect_missing_directory_returns_false() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("missing").join("out.txt");

    let result = try_process_execute_redirected(&out, &["/bin/echo", "hello"]);
    assert!(matches!(result, Err(ExecError::Redirect { .. })));
    assert!(!process_execute_redirected(&out, &["/bin/echo", "hello"]));
    assert!(!out.exists());
}

#[test]
fn test_redirect_only_stdout() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");

    assert!(process_execute_redirected(
        &out,
        &["/bin/sh", "-c", "echo to-stdout; echo to-stderr >&2"]
    ));
    assert_eq!(fs::read_to_string(&out).unwrap(), "to-stdout\n");
}

#[test]
fn test_redirect_nonexistent_program() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");

    assert!(!process_execute_redirected(&out, &["/nonexistent/program"]));
}

// ============================================================================
// Async Variant Tests
// ============================================================================

#[tokio::test]
async fn test_async_shell() {
    assert!(shell_execute_async("exit 0").await);
    assert!(!shell_execute_async("exit 5").await);
}

#[tokio::test]
async fn test_async_process() {
    assert!(process_execute_async(&["/bin/true"]).await);
    assert!(!process_execute_async(&["/bin/false"]).await);
    assert!(!process_execute_async(&["/nonexistent/program"]).await);
}

#[tokio::test]
async fn test_async_redirect() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("async.txt");

    assert!(process_execute_redirected_async(&out, &["/bin/echo", "hello"]).await);
    assert_eq!(fs::read_to_string(&out).unwrap(), "hello\n");
}
