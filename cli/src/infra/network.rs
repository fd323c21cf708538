//! Network infrastructure — implements `PortProbe` with real TCP binds.

use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, TcpListener};

use anyhow::{Context, Result};
use tracing::trace;

use crate::application::ports::PortProbe;
use crate::domain::PortPair;

/// Bind `port` on the dual-stack wildcard `[::]`, falling back to `0.0.0.0`
/// when the IPv6 bind fails for any reason other than the port being taken.
///
/// A dual-stack bind collides with listeners on either family, including
/// loopback-only ones such as `[::1]` or `127.0.0.1`.
///
/// # Errors
///
/// Returns the bind error, `AddrInUse` when the port is held.
pub fn bind_wildcard(port: u16) -> std::io::Result<TcpListener> {
    match TcpListener::bind((Ipv6Addr::UNSPECIFIED, port)) {
        Err(e) if e.kind() != ErrorKind::AddrInUse => {
            trace!(port, error = %e, "IPv6 wildcard bind failed, trying IPv4");
            TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
        }
        other => other,
    }
}

/// Production probe: bind a wildcard listener on `<port>` and drop it at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpPortProbe;

impl PortProbe for TcpPortProbe {
    fn is_free(&self, port: u16) -> bool {
        match bind_wildcard(port) {
            Ok(_listener) => true,
            Err(e) => {
                trace!(port, error = %e, "port unavailable");
                false
            }
        }
    }
}

/// A port pair whose listeners are held open until handed to the consumer.
///
/// Unlike a probe, nobody else can take these ports while this value lives.
#[derive(Debug)]
pub struct ReservedPorts {
    pair: PortPair,
    proxy: TcpListener,
    app: TcpListener,
}

impl ReservedPorts {
    /// Bind both ports of `pair` on the wildcard address.
    ///
    /// # Errors
    ///
    /// Returns an error naming the port that could not be bound. Nothing stays
    /// bound on failure.
    pub fn reserve(pair: PortPair) -> Result<Self> {
        let proxy = bind(pair.proxy_port)?;
        let app = bind(pair.app_port)?;
        Ok(Self { pair, proxy, app })
    }

    #[must_use]
    pub fn pair(&self) -> PortPair {
        self.pair
    }

    /// Hand both sockets over as `(proxy, app)`.
    #[must_use]
    pub fn into_listeners(self) -> (TcpListener, TcpListener) {
        (self.proxy, self.app)
    }
}

fn bind(port: u16) -> Result<TcpListener> {
    bind_wildcard(port).with_context(|| format!("cannot reserve port {port}"))
}
