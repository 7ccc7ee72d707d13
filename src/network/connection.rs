use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tokio::net::UdpSocket;
use tokio::time::{timeout_at, Instant};
use tokio_util::codec::Encoder;
use tracing::{debug, warn};

use super::discovery::{bind_addr_for, resolve};
use crate::core::{Error, Result, PACKET_SIZE};
use crate::protocol::{PacketCodec, RequestPacket};

/// Performs one request/reply exchange with `host:port`
///
/// Resolution, send and receive all share one deadline of `now + timeout`.
/// Returns at most 48 reply bytes; a shorter datagram is returned as is so
/// the decoder can reject it. The socket is closed on every exit path.
pub async fn exchange(host: &str, port: u16, timeout: Duration) -> Result<Bytes> {
    let round_trip = round_trip(host, port);

    match Instant::now().checked_add(timeout) {
        Some(deadline) => timeout_at(deadline, round_trip).await.unwrap_or_else(|_| {
            warn!(%host, port, timeout_secs = timeout.as_secs(), "no reply before deadline");
            Err(Error::Timeout(timeout))
        }),
        // Deadline beyond the clock's range
        None => round_trip.await,
    }
}

async fn round_trip(host: &str, port: u16) -> Result<Bytes> {
    let addr = resolve(host, port).await?;

    let socket = UdpSocket::bind(bind_addr_for(&addr))
        .await
        .map_err(|e| Error::network(format!("Failed to bind socket: {}", e)))?;
    socket
        .connect(addr)
        .await
        .map_err(|e| Error::network(format!("Failed to connect to {}: {}", addr, e)))?;

    let mut request = BytesMut::with_capacity(PACKET_SIZE);
    PacketCodec::new().encode(RequestPacket::new(), &mut request)?;
    socket
        .send(&request)
        .await
        .map_err(|e| Error::network(format!("Failed to send request to {}: {}", addr, e)))?;
    debug!(%addr, bytes = request.len(), "request sent");

    let mut reply = BytesMut::zeroed(PACKET_SIZE);
    let len = socket
        .recv(&mut reply)
        .await
        .map_err(|e| Error::network(format!("Failed to read reply from {}: {}", addr, e)))?;
    reply.truncate(len);
    debug!(%addr, bytes = len, "reply received");

    Ok(reply.freeze())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio_test::{assert_err, assert_ok};

    /// Binds a loopback responder that answers the first datagram with `reply`
    /// and hands back what it received.
    async fn responder(reply: Vec<u8>) -> (u16, tokio::task::JoinHandle<Vec<u8>>) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();
        let handle = tokio::spawn(async move {
            let mut buf = [0u8; 512];
            let (len, peer): (usize, SocketAddr) = socket.recv_from(&mut buf).await.unwrap();
            socket.send_to(&reply, peer).await.unwrap();
            buf[..len].to_vec()
        });
        (port, handle)
    }

    #[tokio::test]
    async fn test_exchange_round_trip() {
        let mut reply = vec![0u8; 48];
        reply[0] = 0x1C;
        reply[1] = 2;
        let (port, handle) = responder(reply.clone()).await;

        let bytes = assert_ok!(exchange("127.0.0.1", port, Duration::from_secs(2)).await);
        assert_eq!(&bytes[..], &reply[..]);

        let request = handle.await.unwrap();
        assert_eq!(request.len(), 48);
        assert_eq!(request[0], 0x1B);
        assert!(request[1..].iter().all(|&b| b == 0));
    }

    #[tokio::test]
    async fn test_short_reply_returned_unpadded() {
        let (port, handle) = responder(vec![0x24; 20]).await;
        let bytes = assert_ok!(exchange("127.0.0.1", port, Duration::from_secs(2)).await);
        assert_eq!(bytes.len(), 20);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_long_reply_capped_at_header() {
        let (port, handle) = responder(vec![0x24; 68]).await;
        let bytes = assert_ok!(exchange("127.0.0.1", port, Duration::from_secs(2)).await);
        assert_eq!(bytes.len(), 48);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_timeout_when_server_is_silent() {
        // Bound but never answers
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = silent.local_addr().unwrap().port();

        let started = std::time::Instant::now();
        let result = exchange("127.0.0.1", port, Duration::from_secs(1)).await;
        let elapsed = started.elapsed();

        let err = assert_err!(result);
        assert!(matches!(err, Error::Timeout(t) if t == Duration::from_secs(1)));
        assert!(elapsed >= Duration::from_millis(900), "returned after {:?}", elapsed);
        assert!(elapsed < Duration::from_secs(5), "returned after {:?}", elapsed);
        drop(silent);
    }
}
