//! Domain types and validators for hotswap configuration.
//!
//! Pure functions only — no I/O, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::build::{BuildSpec, DEFAULT_BUILD_TOOL, DEFAULT_VENDOR_WRAPPER};
use crate::domain::error::ConfigError;
use crate::domain::port::{DEFAULT_APP_PORT, DEFAULT_PROXY_PORT};

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `hotswap.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HotswapConfig {
    /// Build settings.
    pub build: BuildConfig,
    /// Requested ports.
    pub ports: PortsConfig,
}

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory the build and pre-build commands run in.
    pub path: PathBuf,
    /// Directory the compiled binary is written to.
    pub output_dir: PathBuf,
    /// Output binary name. Empty falls back to `bin`.
    pub bin: String,
    /// Build through the dependency-vendoring wrapper.
    pub godep: bool,
    /// Shell command run before every build. Blank means none.
    pub pre_build: String,
    /// Extra arguments appended to the build invocation.
    pub build_args: Vec<String>,
    /// Build tool program.
    pub tool: String,
    /// Vendoring wrapper program.
    pub vendor_wrapper: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            bin: String::new(),
            godep: false,
            pre_build: String::new(),
            build_args: Vec::new(),
            tool: DEFAULT_BUILD_TOOL.to_string(),
            vendor_wrapper: DEFAULT_VENDOR_WRAPPER.to_string(),
        }
    }
}

impl BuildConfig {
    /// Convert into an immutable [`BuildSpec`] for the current platform.
    #[must_use]
    pub fn to_spec(&self) -> BuildSpec {
        BuildSpec::new(&self.path, &self.output_dir, &self.bin, &self.pre_build)
            .with_dependency_mode(self.godep)
            .with_extra_args(self.build_args.iter().cloned())
            .with_tool(self.tool.clone())
            .with_vendor_wrapper(self.vendor_wrapper.clone())
    }
}

/// Requested proxy and application ports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PortsConfig {
    pub proxy: u16,
    pub app: u16,
}

impl Default for PortsConfig {
    fn default() -> Self {
        Self {
            proxy: DEFAULT_PROXY_PORT,
            app: DEFAULT_APP_PORT,
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

impl HotswapConfig {
    /// Check the values serde cannot.
    ///
    /// # Errors
    ///
    /// Returns an error if a port is 0 or a program name is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [("ports.proxy", self.ports.proxy), ("ports.app", self.ports.app)] {
            if value == 0 {
                return Err(ConfigError::InvalidPort {
                    key: key.to_string(),
                    value,
                });
            }
        }
        for (key, value) in [
            ("build.tool", &self.build.tool),
            ("build.vendor_wrapper", &self.build.vendor_wrapper),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyTool {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
