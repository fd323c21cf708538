//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::ExitStatus;

use anyhow::Result;

use crate::domain::{CommandSpec, HotswapConfig};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Result of a process that was launched and ran to completion.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit status reported by the OS.
    pub status: ExitStatus,
    /// Standard output and standard error interleaved as one stream.
    pub combined: Vec<u8>,
}

impl CommandOutput {
    /// Combined output decoded lossily as UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.combined).into_owned()
    }
}

// ── Process Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
pub trait ProcessRunner {
    /// Run a command to completion, capturing stdout and stderr as one stream.
    ///
    /// # Errors
    ///
    /// Returns an error only when the process cannot be launched or waited on.
    /// A process that runs and exits non-zero is `Ok` with a failing status.
    fn run_combined(&self, cmd: &CommandSpec) -> std::io::Result<CommandOutput>;
}

// ── Port Probe Port ───────────────────────────────────────────────────────────

/// Abstracts TCP port availability checks so the allocator can be tested
/// without touching the OS socket table.
pub trait PortProbe {
    /// Return `true` if `port` could be bound on the wildcard address right now.
    ///
    /// The answer is a point-in-time observation, not a reservation.
    fn is_free(&self, port: u16) -> bool;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Pass raw tool output through to the console unchanged.
    fn echo(&self, output: &[u8]);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading the project configuration file.
pub trait ConfigStore {
    /// Load the configuration, returning defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<HotswapConfig>;
    /// Path of the configuration file this store reads.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run_combined(&self, cmd: &CommandSpec) -> std::io::Result<CommandOutput> {
        (**self).run_combined(cmd)
    }
}

impl<T: PortProbe + ?Sized> PortProbe for &T {
    fn is_free(&self, port: u16) -> bool {
        (**self).is_free(port)
    }
}
