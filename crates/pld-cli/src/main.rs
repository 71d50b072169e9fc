use clap::Parser;
use pld_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; a bad log file must not stop the run.
    match cli.global.log_file.as_deref() {
        Some(path) => {
            if let Err(err) = logging::init_logging_file(path) {
                logging::init_logging_stderr();
                tracing::warn!("falling back to stderr logging: {:#}", err);
            }
        }
        None => logging::init_logging_stderr(),
    }

    let result = cli.run();
    if let Err(err) = &result {
        eprintln!("pld error: {:#}", err);
    }
    std::process::exit(cli::exit_code(&result));
}
