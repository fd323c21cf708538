//! Hotswap - build orchestration and port allocation for live-reload development

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotswap_cli::cli::Cli;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "HOTSWAP_LOG";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
