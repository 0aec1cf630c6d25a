//! Argument vectors and shell command lines.

use std::path::Path;

use crate::config::ShellConfig;
use crate::error::ExecError;
use crate::Result;

/// A validated argument vector.
///
/// Element 0 is the absolute path of the executable; it is also passed to
/// the new image as its argument 0. The remaining elements are positional
/// arguments, passed unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argv {
    args: Vec<String>,
}

impl Argv {
    /// Build an argument vector from a slice of string-likes.
    pub fn new<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_owned()).collect();

        let program = args.first().ok_or(ExecError::EmptyArgv)?;
        if !Path::new(program).is_absolute() {
            return Err(ExecError::RelativePath(program.clone()));
        }
        if let Some(index) = args.iter().position(|a| a.contains('\0')) {
            return Err(ExecError::NulByte { index });
        }

        Ok(Self { args })
    }

    /// Build an argument vector from a program path and its arguments.
    pub fn with_program<S: AsRef<str>>(program: &str, args: &[S]) -> Result<Self> {
        let mut all: Vec<&str> = Vec::with_capacity(args.len() + 1);
        all.push(program);
        all.extend(args.iter().map(|a| a.as_ref()));
        Self::new(&all)
    }

    /// Absolute path of the executable.
    pub fn program(&self) -> &str {
        &self.args[0]
    }

    /// Positional arguments after argument 0.
    pub fn args(&self) -> &[String] {
        &self.args[1..]
    }

    /// Full vector, argument 0 included.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Convert to a std command. Argument 0 of the child is the program path.
    pub(crate) fn to_std_command(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(self.program());
        cmd.args(self.args());
        cmd
    }

    /// Convert to a tokio command.
    pub(crate) fn to_tokio_command(&self) -> tokio::process::Command {
        tokio::process::Command::from(self.to_std_command())
    }
}

/// A command line handed verbatim to the platform interpreter.
#[derive(Debug, Clone)]
pub struct ShellCommand {
    /// The command line to execute.
    pub command_line: String,
    /// Interpreter used to run it.
    pub shell: ShellConfig,
}

impl ShellCommand {
    /// Create a shell command using the platform default interpreter.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            shell: ShellConfig::default(),
        }
    }

    /// Use a different interpreter.
    pub fn shell(mut self, shell: ShellConfig) -> Self {
        self.shell = shell;
        self
    }

    pub(crate) fn to_std_command(&self) -> std::process::Command {
        let mut cmd = std::process::Command::new(&self.shell.program);
        cmd.arg(&self.shell.flag).arg(&self.command_line);
        cmd
    }

    pub(crate) fn to_tokio_command(&self) -> tokio::process::Command {
        tokio::process::Command::from(self.to_std_command())
    }
}
