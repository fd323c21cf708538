//! `hotswap ports` — allocate the proxy/app port pair.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::PortAllocator;
use crate::application::ports::PortProbe;
use crate::domain::{PortPair, PortRole, PortsConfig};
use crate::infra::TcpPortProbe;
use crate::output::json;

/// Arguments for the ports command. Unset flags fall back to `hotswap.yaml`.
#[derive(Args, Default)]
pub struct PortsArgs {
    /// Port the proxy should listen on
    #[arg(long, short, value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Port the built application should listen on
    #[arg(long, short, value_parser = clap::value_parser!(u16).range(1..))]
    pub app_port: Option<u16>,
}

impl PortsArgs {
    /// The requested pair after overlaying flags onto configured ports.
    #[must_use]
    pub fn requested(&self, base: PortsConfig) -> PortPair {
        PortPair {
            proxy_port: self.port.unwrap_or(base.proxy),
            app_port: self.app_port.unwrap_or(base.app),
        }
    }
}

/// Run the ports command.
///
/// # Errors
///
/// Returns an error only if JSON rendering fails.
pub fn run(app: &AppContext, args: &PortsArgs) -> Result<ExitCode> {
    run_with(app, args, TcpPortProbe)
}

/// Allocate with an explicit probe and render the outcome.
///
/// # Errors
///
/// Returns an error only if JSON rendering fails.
pub fn run_with(app: &AppContext, args: &PortsArgs, probe: impl PortProbe) -> Result<ExitCode> {
    let requested = args.requested(app.config.ports);
    let allocator = PortAllocator::new(probe);
    match allocator.find_available_ports(requested.proxy_port, requested.app_port) {
        Ok(pair) => {
            if app.is_json() {
                println!("{}", json::format_value(&pair)?);
            } else {
                if pair != requested {
                    app.output.warn(&format!(
                        "Requested ports {}/{} unavailable",
                        requested.proxy_port, requested.app_port
                    ));
                }
                app.output.port(PortRole::Proxy, pair.proxy_port);
                app.output.port(PortRole::App, pair.app_port);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if app.is_json() {
                println!("{}", json::format_error(&err.to_string(), "PORTS_EXHAUSTED")?);
            } else {
                app.output.error(&err.to_string());
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
