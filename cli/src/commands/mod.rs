//! Command implementations

pub mod build;
pub mod check_port;
pub mod ports;
pub mod version;
