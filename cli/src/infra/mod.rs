//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, socket
//! probing, and config file access.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod command_runner;
pub mod config;
pub mod network;

pub use command_runner::StdProcessRunner;
pub use config::YamlConfigStore;
pub use network::{ReservedPorts, TcpPortProbe};
