//! Application service — proxy/app port allocation use-case.
//!
//! Every answer is a point-in-time probe: a returned port is believed free,
//! not reserved. Callers that must not lose the race hold the sockets via
//! `infra::network::ReservedPorts` instead.

use tracing::{debug, warn};

use crate::application::ports::PortProbe;
use crate::domain::port::scan_window;
use crate::domain::{PortError, PortPair, PortRole};

/// Finds free TCP ports using a [`PortProbe`].
pub struct PortAllocator<P> {
    probe: P,
}

impl<P: PortProbe> PortAllocator<P> {
    #[must_use]
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// Whether `port` can be bound right now.
    ///
    /// Port 0 asks the OS for an ephemeral port and is never reported free.
    #[must_use]
    pub fn check_port(&self, port: u16) -> bool {
        port != 0 && self.probe.is_free(port)
    }

    /// First free port in `start..start + 100`, or `None` if all are taken.
    #[must_use]
    pub fn find_available_port(&self, start: u16) -> Option<u16> {
        let found = scan_window(start).find(|&p| self.check_port(p));
        if found.is_none() {
            debug!(start, "scan window exhausted");
        }
        found
    }

    /// Two distinct free ports, preferring the requested values.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Exhausted`] naming the role whose scan window had
    /// no usable port. No partial pair is returned.
    pub fn find_available_ports(&self, proxy_port: u16, app_port: u16) -> Result<PortPair, PortError> {
        if proxy_port != app_port && self.check_port(proxy_port) && self.check_port(app_port) {
            return Ok(PortPair {
                proxy_port,
                app_port,
            });
        }

        let proxy = if self.check_port(proxy_port) {
            proxy_port
        } else {
            self.find_available_port(proxy_port)
                .ok_or(PortError::Exhausted {
                    role: PortRole::Proxy,
                    start: proxy_port,
                })?
        };

        let app = if app_port != proxy && self.check_port(app_port) {
            app_port
        } else {
            scan_window(app_port)
                .find(|&p| p != proxy && self.check_port(p))
                .ok_or(PortError::Exhausted {
                    role: PortRole::App,
                    start: app_port,
                })?
        };

        if (proxy, app) != (proxy_port, app_port) {
            warn!(
                requested_proxy = proxy_port,
                requested_app = app_port,
                proxy,
                app,
                "requested ports unavailable, using alternatives"
            );
        }
        Ok(PortPair {
            proxy_port: proxy,
            app_port: app,
        })
    }
}
