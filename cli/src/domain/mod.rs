//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod build;
pub mod config;
pub mod error;
pub mod port;

pub use build::{BuildSpec, CommandSpec, TargetOs, resolve_binary_name};
pub use config::{BuildConfig, HotswapConfig, PortsConfig};
pub use error::{BuildError, ConfigError, PortError};
pub use port::{PortPair, PortRole, SCAN_WINDOW};
