//! Listener binding with optional port probing.

use std::io;

use anyhow::{bail, Context, Result};
use tokio::net::TcpListener;

/// Number of ports tried after the requested one when probing.
pub const PROBE_ATTEMPTS: u16 = 10;

/// Bind `host:port`.
///
/// With `probe` set and the port already in use, the next
/// [`PROBE_ATTEMPTS`] ports are tried in order and the first free one wins.
/// Errors other than "address in use" are returned immediately.
pub async fn bind_with_probe(host: &str, port: u16, probe: bool) -> Result<TcpListener> {
    match TcpListener::bind((host, port)).await {
        Ok(listener) => return Ok(listener),
        Err(e) if probe && e.kind() == io::ErrorKind::AddrInUse => {
            tracing::warn!(port, "Port already in use, probing for an alternative");
        }
        Err(e) => return Err(e).with_context(|| format!("failed to bind {host}:{port}")),
    }

    for candidate in (1..=PROBE_ATTEMPTS).filter_map(|offset| port.checked_add(offset)) {
        match TcpListener::bind((host, candidate)).await {
            Ok(listener) => {
                tracing::info!(port = candidate, "Using alternative port");
                return Ok(listener);
            }
            Err(e) if e.kind() == io::ErrorKind::AddrInUse => continue,
            Err(e) => {
                return Err(e).with_context(|| format!("failed to bind {host}:{candidate}"))
            }
        }
    }

    bail!(
        "no free port found on {host} after {} attempts starting at {port}",
        PROBE_ATTEMPTS
    )
}
