//! Shared fakes for unit tests.
//!
//! [`ScriptedRunner`] replays canned process results and records every
//! command it was asked to run; [`FakeProbe`] reports ports from a fixed
//! occupied set.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;
use std::process::ExitStatus;

use anyhow::Result;
use hotswap_cli::application::ports::{
    CommandOutput, ConfigStore, PortProbe, ProcessRunner, ProgressReporter,
};
use hotswap_cli::domain::{CommandSpec, HotswapConfig};

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
/// On Windows `ExitStatusExt::from_raw` takes the exit code directly.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn exited(code: i32, output: &[u8]) -> std::io::Result<CommandOutput> {
    Ok(CommandOutput {
        status: exit_status(code),
        combined: output.to_vec(),
    })
}

pub fn not_found() -> std::io::Result<CommandOutput> {
    Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "No such file or directory",
    ))
}

// ── Process runner ───────────────────────────────────────────────────────────

/// Replays queued results in order. Running past the end of the queue is an
/// I/O error, which the builder treats as a launch failure.
#[derive(Default)]
pub struct ScriptedRunner {
    results: RefCell<VecDeque<std::io::Result<CommandOutput>>>,
    calls: RefCell<Vec<CommandSpec>>,
}

impl ScriptedRunner {
    pub fn new(results: impl IntoIterator<Item = std::io::Result<CommandOutput>>) -> Self {
        Self {
            results: RefCell::new(results.into_iter().collect()),
            calls: RefCell::default(),
        }
    }

    pub fn push(&self, result: std::io::Result<CommandOutput>) {
        self.results.borrow_mut().push_back(result);
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    pub fn programs(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.program.clone()).collect()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run_combined(&self, cmd: &CommandSpec) -> std::io::Result<CommandOutput> {
        self.calls.borrow_mut().push(cmd.clone());
        self.results.borrow_mut().pop_front().unwrap_or_else(|| {
            Err(std::io::Error::other(format!(
                "unexpected command in this test: {}",
                cmd.display()
            )))
        })
    }
}

// ── Port probe ───────────────────────────────────────────────────────────────

/// Every port is free except the ones listed; records probe order.
#[derive(Default)]
pub struct FakeProbe {
    occupied: BTreeSet<u16>,
    probed: RefCell<Vec<u16>>,
}

impl FakeProbe {
    pub fn occupied(ports: impl IntoIterator<Item = u16>) -> Self {
        Self {
            occupied: ports.into_iter().collect(),
            probed: RefCell::default(),
        }
    }

    pub fn probed(&self) -> Vec<u16> {
        self.probed.borrow().clone()
    }

    pub fn is_occupied(&self, port: u16) -> bool {
        self.occupied.contains(&port)
    }
}

impl PortProbe for FakeProbe {
    fn is_free(&self, port: u16) -> bool {
        self.probed.borrow_mut().push(port);
        !self.occupied.contains(&port)
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Records everything a service reports.
#[derive(Default)]
pub struct RecordingReporter {
    pub steps: RefCell<Vec<String>>,
    pub echoed: RefCell<Vec<u8>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_string());
    }
    fn success(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_string());
    }
    fn warn(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_string());
    }
    fn echo(&self, output: &[u8]) {
        self.echoed.borrow_mut().extend_from_slice(output);
    }
}

// ── Config store ─────────────────────────────────────────────────────────────

/// Returns a fixed config without touching the filesystem.
pub struct StaticConfig(pub HotswapConfig);

impl ConfigStore for StaticConfig {
    fn load(&self) -> Result<HotswapConfig> {
        Ok(self.0.clone())
    }
    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("hotswap.yaml"))
    }
}

// ── Exit codes ───────────────────────────────────────────────────────────────

/// Compare exit codes through their `Debug` form; `ExitCode` exposes no value.
pub fn assert_exit(actual: std::process::ExitCode, expected: std::process::ExitCode) {
    assert_eq!(format!("{actual:?}"), format!("{expected:?}"));
}
