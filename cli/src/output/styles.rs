//! owo-colors stylesheet for terminal output.

use owo_colors::Style;

/// Styles for each kind of line the CLI prints. Plain until [`colorize`]d.
///
/// [`colorize`]: Styles::colorize
#[derive(Default, Clone)]
pub struct Styles {
    pub success: Style,
    pub warning: Style,
    pub error: Style,
    /// Build progress arrows.
    pub step: Style,
    /// Port role labels (`proxy`, `app`).
    pub label: Style,
    /// Allocated port numbers.
    pub port: Style,
}

impl Styles {
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.step = Style::new().cyan();
        self.label = Style::new().dimmed();
        self.port = Style::new().bold();
    }
}
