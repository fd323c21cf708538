//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! or `crate::application`. All error types implement `thiserror::Error` and
//! convert to `anyhow::Error` via the `?` operator.

use thiserror::Error;

use crate::domain::port::PortRole;

// ── Build errors ──────────────────────────────────────────────────────────────

/// Why a build did not produce a binary.
///
/// `PreBuild` and `Compile` display the captured tool output verbatim so it
/// can be shown to the developer unmodified.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The pre-build command exited unsuccessfully; the compile step never ran.
    #[error("{output}")]
    PreBuild { output: String },

    /// The build tool exited unsuccessfully.
    #[error("{output}")]
    Compile { output: String },

    /// The shell or build tool could not be started at all.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl BuildError {
    /// The text recorded as the build's captured output.
    #[must_use]
    pub fn captured_output(&self) -> String {
        match self {
            Self::PreBuild { output } | Self::Compile { output } => output.clone(),
            Self::Launch { .. } => self.to_string(),
        }
    }
}

// ── Port errors ───────────────────────────────────────────────────────────────

/// Errors from pair allocation. Single-port scans report exhaustion as `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PortError {
    #[error("no free {role} port in the 100-port window starting at {start}")]
    Exhausted { role: PortRole, start: u16 },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}\n\nPorts must be between 1 and 65535.")]
    InvalidPort { key: String, value: u16 },

    #[error("{key} must not be empty")]
    EmptyTool { key: String },
}
