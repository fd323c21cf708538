//! Terminal and JSON rendering for the `hotswap` commands.

pub mod json;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;

use crate::domain::PortRole;
pub use reporter::{StderrEchoReporter, TerminalReporter};
pub use styles::Styles;

/// Styling and verbosity shared by every human-mode command.
pub struct OutputContext {
    pub styles: Styles,
    /// Suppress everything except errors and echoed tool output.
    pub quiet: bool,
}

impl OutputContext {
    /// Colors are used only when stdout is a terminal and neither
    /// `--no-color` nor `NO_COLOR` is set.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let mut styles = Styles::default();
        if !no_color && Term::stdout().is_term() && std::env::var("NO_COLOR").is_err() {
            styles.colorize();
        }
        Self { styles, quiet }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print one allocated port as `<role>  <port>`. Suppressed when `quiet`.
    pub fn port(&self, role: PortRole, port: u16) {
        if !self.quiet {
            println!("{}", self.port_line(role, port));
        }
    }

    fn port_line(&self, role: PortRole, port: u16) -> String {
        format!(
            "  {:<5}  {}",
            role.style(self.styles.label),
            port.style(self.styles.port)
        )
    }
}
