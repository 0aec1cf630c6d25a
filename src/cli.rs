//! Command-line interface for execkit.
//!
//! Uses lexopt for minimal binary size overhead. Options come before the
//! operation; everything after the operation name is passed through verbatim.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::ShellConfig;
use crate::execution::{
    process_execute, process_execute_redirected, shell_execute_with, ShellCommand,
};

/// Operation selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Run a command line through the interpreter.
    System(String),
    /// Run an absolute path with an argument vector.
    Exec(Vec<String>),
    /// As `Exec`, with stdout redirected to `output`.
    ExecRedirect {
        output: PathBuf,
        argv: Vec<String>,
    },
}

impl Operation {
    fn from_parts(name: &str, mut rest: Vec<String>) -> Result<Self, ArgsError> {
        match name {
            "system" => {
                if rest.is_empty() {
                    return Err(ArgsError::MissingOperand("COMMAND"));
                }
                Ok(Operation::System(rest.join(" ")))
            }
            "exec" => {
                if rest.is_empty() {
                    return Err(ArgsError::MissingOperand("PATH"));
                }
                Ok(Operation::Exec(rest))
            }
            "exec-redirect" => {
                if rest.is_empty() {
                    return Err(ArgsError::MissingOperand("OUTPUT_FILE"));
                }
                let output = PathBuf::from(rest.remove(0));
                if rest.is_empty() {
                    return Err(ArgsError::MissingOperand("PATH"));
                }
                Ok(Operation::ExecRedirect { output, argv: rest })
            }
            other => Err(ArgsError::UnknownOperation(other.to_string())),
        }
    }

    /// Run the operation, collapsing the outcome to a boolean.
    pub fn run(&self, shell: &ShellConfig) -> bool {
        match self {
            Operation::System(command) => {
                shell_execute_with(&ShellCommand::new(command.as_str()).shell(shell.clone()))
            }
            Operation::Exec(argv) => process_execute(argv.as_slice()),
            Operation::ExecRedirect { output, argv } => {
                process_execute_redirected(output, argv.as_slice())
            }
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::System(_) => "system",
            Operation::Exec(_) => "exec",
            Operation::ExecRedirect { .. } => "exec-redirect",
        }
    }
}

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Operation to run.
    pub operation: Option<Operation>,
    /// Path to configuration file.
    pub config: Option<PathBuf>,
    /// Interpreter override for `system`.
    pub shell: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, ArgsError> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, ArgsError>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('c') | Long("config") => {
                result.config = Some(parser.value()?.parse()?);
            }
            Short('s') | Long("shell") => {
                result.shell = Some(parser.value()?.parse()?);
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.parse()?);
            }
            Value(val) => {
                let name = val.string()?;
                let rest = parser
                    .raw_args()?
                    .map(|arg| {
                        arg.into_string()
                            .map_err(|arg| ArgsError::NotUnicode(arg.to_string_lossy().into()))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                result.operation = Some(Operation::from_parts(&name, rest)?);
                break;
            }
            _ => return Err(arg.unexpected().into()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"execkit {version}
Run external commands and report success through the exit code

USAGE:
    execkit [OPTIONS] system <COMMAND>...
    execkit [OPTIONS] exec <PATH> [ARGS]...
    execkit [OPTIONS] exec-redirect <OUTPUT_FILE> <PATH> [ARGS]...

OPERATIONS:
    system          Run COMMAND through the command interpreter
    exec            Run the program at absolute PATH with ARGS (no PATH search)
    exec-redirect   As exec, with stdout written to OUTPUT_FILE (created/truncated)

OPTIONS:
    -c, --config <FILE>     Path to configuration file (JSON)
    -s, --shell <PROGRAM>   Command interpreter for `system`
    -l, --log-level <LVL>   Log level (error, warn, info, debug, trace)
    -h, --help              Print help
    -V, --version           Print version

ENVIRONMENT VARIABLES:
    EXECKIT_SHELL           Command interpreter (overrides config)
    EXECKIT_LOG_LEVEL       Log level (overrides config)
    RUST_LOG                Alternative log level setting

EXIT STATUS:
    0   the command succeeded
    1   the command failed, could not be started, or was killed by a signal
    2   usage or configuration error

EXAMPLES:
    execkit system 'ls /tmp | wc -l'
    execkit exec /bin/echo hello
    execkit exec-redirect /tmp/out.txt /bin/echo hello
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("execkit {}", env!("CARGO_PKG_VERSION"));
}

/// Argument parsing errors.
#[derive(Debug)]
pub enum ArgsError {
    /// Lexopt parsing error.
    Lexopt(lexopt::Error),
    /// Operation name not recognized.
    UnknownOperation(String),
    /// A required operand is missing.
    MissingOperand(&'static str),
    /// Argument is not valid UTF-8.
    NotUnicode(String),
}

impl std::fmt::Display for ArgsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexopt(e) => write!(f, "{}", e),
            Self::UnknownOperation(op) => write!(f, "unknown operation: '{}'", op),
            Self::MissingOperand(name) => write!(f, "missing operand: <{}>", name),
            Self::NotUnicode(arg) => write!(f, "argument is not valid unicode: '{}'", arg),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<lexopt::Error> for ArgsError {
    fn from(e: lexopt::Error) -> Self {
        Self::Lexopt(e)
    }
}
