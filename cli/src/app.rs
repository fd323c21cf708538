//! Application context — unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the global flags and the project config
//! file, then passed as `&AppContext` to each command.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::HotswapConfig;
use crate::infra::YamlConfigStore;
use crate::output::OutputContext;

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Project configuration, defaults when no file exists.
    pub config: HotswapConfig,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags, reading config
    /// through `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is unreadable or invalid.
    pub fn new(flags: &AppFlags, store: &impl ConfigStore) -> Result<Self> {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            config: store.load()?,
        })
    }

    /// Context for the current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but is unreadable or invalid.
    pub fn from_current_dir(flags: &AppFlags) -> Result<Self> {
        Self::new(flags, &YamlConfigStore::from_env("."))
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }
}
