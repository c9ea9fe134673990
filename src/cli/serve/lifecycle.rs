//! Server lifecycle management.

use crate::{config::SiteConfig, log};
use anyhow::Result;
use crossbeam::channel::Receiver;
use std::{
    net::SocketAddr,
    thread::{self, JoinHandle},
    time::Duration,
};
use tiny_http::Server;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind to the specified interface and port, with automatic port retry.
pub fn bind_with_retry(
    interface: std::net::IpAddr,
    base_port: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;
    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        MAX_PORT_RETRIES,
        base_port,
        base_port.saturating_add(MAX_PORT_RETRIES - 1),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

/// Spawn the file watcher thread when `serve.watch` is enabled.
pub fn spawn_watcher(config: &SiteConfig, shutdown_rx: Receiver<()>) -> Option<JoinHandle<()>> {
    if !config.serve.watch {
        return None;
    }

    let targets = super::watch::WatchTargets::new(config);
    Some(thread::spawn(move || {
        if let Err(e) = super::watch::run(&targets, &shutdown_rx) {
            log!("watch"; "error: {}", e);
        }
    }))
}

/// Wait for the watcher to exit (max 2 seconds).
pub fn wait_for_shutdown(handle: Option<JoinHandle<()>>) {
    let Some(handle) = handle else { return };

    for _ in 0..40 {
        if handle.is_finished() {
            let _ = handle.join();
            return;
        }
        thread::sleep(Duration::from_millis(50));
    }
}
