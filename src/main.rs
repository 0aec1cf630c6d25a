//! execkit binary entry point.

use std::process::ExitCode;

use execkit::cli::{self, Args};
use execkit::config::Config;
use execkit::logging;
use tracing::{debug, info};

/// Exit status for usage and configuration errors.
const USAGE_ERROR: u8 = 2;

fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {}", e);
            eprintln!("Try 'execkit --help' for more information.");
            return ExitCode::from(USAGE_ERROR);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    run(args)
}

fn run(args: Args) -> ExitCode {
    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(USAGE_ERROR);
        }
    };

    // A subscriber may already be installed by an embedding process.
    let _ = logging::init_with_level(config.log_filter());

    let Some(operation) = args.operation else {
        eprintln!("error: no operation given");
        eprintln!("Try 'execkit --help' for more information.");
        return ExitCode::from(USAGE_ERROR);
    };

    debug!(shell = %config.shell.program, "configuration loaded");

    let ok = operation.run(&config.shell);
    info!(operation = operation.name(), success = ok, "done");

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
