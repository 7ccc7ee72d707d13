//! Composes the transport and the decoder for callers that want both.

use tracing::info;

use crate::core::{DisplayOptions, QueryInput, QueryTarget, Result};
use crate::network;
use crate::protocol::{decode, DecodedFields};

/// Queries `target` once and decodes the reply
pub async fn probe(target: &QueryTarget, options: DisplayOptions) -> Result<DecodedFields> {
    info!(host = %target.host, port = target.port, "querying NTP server");
    let reply = network::query(target).await?;
    decode(&reply, options)
}

/// Validates raw input, then probes
///
/// Validation failures are returned before any network activity.
pub async fn probe_input(input: &QueryInput, options: DisplayOptions) -> Result<DecodedFields> {
    let target = input.validate()?;
    probe(&target, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, ErrorClass};
    use std::time::Duration;
    use tokio::net::UdpSocket;

    async fn serve_once(reply: Vec<u8>) -> u16 {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();
        tokio::spawn(async move {
            let mut buf = [0u8; 64];
            if let Ok((_, peer)) = socket.recv_from(&mut buf).await {
                let _ = socket.send_to(&reply, peer).await;
            }
        });
        port
    }

    #[tokio::test]
    async fn test_probe_decodes_reply() {
        let mut reply = vec![0u8; 48];
        reply[0] = 0x24;
        reply[1] = 1;
        reply[12..16].copy_from_slice(b"GOOG");
        let port = serve_once(reply).await;

        let target = QueryTarget::new("127.0.0.1", port, Duration::from_secs(2));
        let fields = probe(&target, DisplayOptions::default()).await.unwrap();
        assert_eq!(fields.mode, "4 (Server)");
        assert_eq!(fields.stratum, "1 (Primary Server)");
        assert_eq!(fields.reference_id, "GOOG");
    }

    #[tokio::test]
    async fn test_probe_short_reply_is_decode_error() {
        let port = serve_once(vec![0x24; 12]).await;

        let target = QueryTarget::new("127.0.0.1", port, Duration::from_secs(2));
        let err = probe(&target, DisplayOptions::default()).await.unwrap_err();
        assert!(matches!(err, Error::PacketTooShort { received: 12, .. }));
        assert_eq!(err.class(), ErrorClass::Decode);
    }

    #[tokio::test]
    async fn test_empty_host_never_queries() {
        let input = QueryInput::new("");
        let err = probe_input(&input, DisplayOptions::default()).await.unwrap_err();
        assert_eq!(err.class(), ErrorClass::Validation);
    }
}
