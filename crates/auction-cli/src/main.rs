//! Command-line entry point for the auction simulator.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use tracing::debug;

use auction_cli::config::Config;
use auction_cli::runner;

fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_args(std::env::args().skip(1))?;

    let report = match &config.input {
        Some(path) => {
            debug!(path = %path.display(), "reading commands from file");
            let file = File::open(path)
                .with_context(|| format!("cannot open input file {}", path.display()))?;
            runner::run_session(BufReader::new(file))?
        }
        None => {
            debug!("reading commands from standard input");
            let stdin = io::stdin();
            runner::run_session(stdin.lock())?
        }
    };

    // The report is the only thing that belongs on stdout; diagnostics go
    // to stderr through tracing.
    print!("{}", report);
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
