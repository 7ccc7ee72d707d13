use std::net::SocketAddr;

use tokio::net::lookup_host;
use tracing::debug;

use crate::core::{Error, Result};

/// Resolves `host:port` to the first address returned
///
/// Accepts names as well as IPv4 and IPv6 literals.
pub async fn resolve(host: &str, port: u16) -> Result<SocketAddr> {
    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|e| Error::resolution(format!("Failed to resolve {}: {}", host, e)))?;

    let addr = addrs
        .next()
        .ok_or_else(|| Error::resolution(format!("{} resolved to no addresses", host)))?;

    debug!(%host, %addr, "resolved server address");
    Ok(addr)
}

/// Wildcard local address in the same family as `target`
pub fn bind_addr_for(target: &SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => SocketAddr::from(([0, 0, 0, 0], 0)),
        SocketAddr::V6(_) => SocketAddr::from(([0u16; 8], 0)),
    }
}
