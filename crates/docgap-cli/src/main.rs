use docgap_core::logging;
use std::process::ExitCode;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Initialize logging as early as possible; a read-only state dir must not stop the run.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("docgap error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
