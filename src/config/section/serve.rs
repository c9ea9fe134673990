//! `[serve]` section configuration.
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 5277                 # HTTP port number
//! watch = true                # Reload content on file changes
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the preview reachable from the LAN.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

/// Development server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// Enable file watcher for live content reload.
    pub watch: bool,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 5277,
            watch: true,
        }
    }
}

impl ServeConfig {
    pub const PORT: FieldPath = FieldPath::new("serve.port");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.port == 0 {
            diag.error_with_hint(Self::PORT, "port 0 is not allowed", "e.g. port = 5277");
        }
    }
}
