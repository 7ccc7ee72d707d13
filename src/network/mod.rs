//! Query transport
//!
//! This module resolves the server, sends the client request over UDP and
//! returns the raw reply. It knows nothing about the reply's field layout.

mod connection;
mod discovery;

pub use self::connection::exchange;
pub use self::discovery::{bind_addr_for, resolve};

use bytes::Bytes;

use crate::core::{QueryTarget, Result};

/// Runs one exchange against a validated target
pub async fn query(target: &QueryTarget) -> Result<Bytes> {
    exchange(&target.host, target.port, target.timeout).await
}
