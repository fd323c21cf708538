//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags};
use crate::commands;

/// Build orchestration and port allocation for live-reload development
#[derive(Parser)]
#[command(
    name = "hotswap",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pre-build command and compile the project once
    Build(commands::build::BuildArgs),

    /// Allocate a pair of distinct free ports for the proxy and the app
    Ports(commands::ports::PortsArgs),

    /// Check whether a single TCP port is free
    CheckPort(commands::check_port::CheckPortArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the command
    /// fails in a way it does not render itself.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let flags = AppFlags {
            no_color,
            quiet,
            json,
        };
        let app = || AppContext::from_current_dir(&flags);
        match command {
            Command::Version => {
                commands::version::run(json)?;
                Ok(ExitCode::SUCCESS)
            }
            Command::Build(args) => commands::build::run(&app()?, &args),
            Command::Ports(args) => commands::ports::run(&app()?, &args),
            Command::CheckPort(args) => commands::check_port::run(&app()?, &args),
        }
    }
}
