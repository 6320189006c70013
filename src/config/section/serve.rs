//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 4000                 # HTTP port number
//! workers = 4                 # Request handler threads
//! latency_ms = 0              # Simulated entity lookup latency
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// Number of request handler threads.
    pub workers: usize,

    /// Artificial delay for each entity lookup, in milliseconds.
    pub latency_ms: u64,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 4000,
            workers: 4,
            latency_ms: 0,
        }
    }
}

impl ServeConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.workers == 0 {
            diag.error_with_hint("serve.workers", "must be at least 1", "e.g. workers = 4");
        }
    }
}
