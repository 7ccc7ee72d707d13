use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use super::message::{ReplyPacket, RequestPacket};
use crate::core::{Error, PACKET_SIZE};

/// Codec for fixed-size NTP headers
///
/// Encodes client requests and decodes 48-byte replies. Anything after the
/// 48th byte of a frame is left in the buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct PacketCodec;

impl PacketCodec {
    /// Creates a new packet codec
    pub fn new() -> Self {
        PacketCodec
    }
}

impl Decoder for PacketCodec {
    type Item = ReplyPacket;
    type Error = Error;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.len() < PACKET_SIZE {
            // Need the full header
            return Ok(None);
        }

        let frame = src.split_to(PACKET_SIZE);
        ReplyPacket::parse(&frame).map(Some)
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(src)? {
            Some(packet) => Ok(Some(packet)),
            None if src.is_empty() => Ok(None),
            None => Err(Error::too_short(src.len())),
        }
    }
}

impl Encoder<RequestPacket> for PacketCodec {
    type Error = Error;

    fn encode(&mut self, item: RequestPacket, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(PACKET_SIZE);
        item.write(dst);
        Ok(())
    }
}
