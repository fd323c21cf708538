//! `hotswap check-port` — probe a single TCP port.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::application::PortAllocator;
use crate::infra::TcpPortProbe;
use crate::output::json;

/// Arguments for the check-port command.
#[derive(Args)]
pub struct CheckPortArgs {
    /// Port to probe
    pub port: u16,
}

#[derive(Serialize)]
struct PortStatus {
    port: u16,
    free: bool,
}

/// Run the check-port command. Exits non-zero when the port is taken.
///
/// # Errors
///
/// Returns an error only if JSON rendering fails.
pub fn run(app: &AppContext, args: &CheckPortArgs) -> Result<ExitCode> {
    let free = PortAllocator::new(TcpPortProbe).check_port(args.port);
    if app.is_json() {
        println!(
            "{}",
            json::format_value(&PortStatus {
                port: args.port,
                free
            })?
        );
    } else if free {
        app.output.success(&format!("Port {} is free", args.port));
    } else {
        app.output.warn(&format!("Port {} is in use", args.port));
    }
    Ok(if free {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
