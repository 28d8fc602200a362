use clap::Parser;
use lmirror_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible.
    if cli.log_stderr || logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run() {
        tracing::error!("{:#}", err);
        eprintln!("lmirror error: {:#}", err);
        std::process::exit(1);
    }
}
