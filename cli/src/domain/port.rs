//! Port pair type and scan-window arithmetic.
//!
//! Pure functions only — probing lives behind the `PortProbe` port.

use std::fmt;

use serde::Serialize;

/// Number of consecutive ports examined by a forward scan.
pub const SCAN_WINDOW: u16 = 100;

/// Default port for the reverse-proxy front door.
pub const DEFAULT_PROXY_PORT: u16 = 3000;

/// Default port for the built application.
pub const DEFAULT_APP_PORT: u16 = 3001;

/// Which half of a [`PortPair`] a port belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortRole {
    Proxy,
    App,
}

impl fmt::Display for PortRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proxy => f.pad("proxy"),
            Self::App => f.pad("app"),
        }
    }
}

/// Two distinct ports: one for the proxy, one for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortPair {
    pub proxy_port: u16,
    pub app_port: u16,
}

/// Candidate ports for a scan starting at `start`.
///
/// Yields `start..start + SCAN_WINDOW`, truncated at `u16::MAX` rather than
/// wrapping around.
pub fn scan_window(start: u16) -> impl Iterator<Item = u16> {
    let end = u32::from(start) + u32::from(SCAN_WINDOW);
    (u32::from(start)..end).map_while(|p| u16::try_from(p).ok())
}
