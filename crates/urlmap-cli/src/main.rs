use std::process::ExitCode;

use urlmap_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() -> ExitCode {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    let result = CliCommand::run_from_args();
    if let Err(err) = &result {
        eprintln!("urlmap error: {:#}", err);
    }
    ExitCode::from(cli::exit_code(&result))
}
