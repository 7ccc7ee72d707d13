use bytes::{Buf, BufMut};
use serde::Serialize;

use super::header::{version_from_header, LeapIndicator, Mode, ReferenceId, Stratum};
use super::{CLIENT_VERSION, LEAP_SHIFT, VERSION_SHIFT};
use crate::core::{Error, Result, PACKET_SIZE};
use crate::time::{ShortFormat, TimestampFormat};

/// The client query: an all-zero header except LI, VN and mode
///
/// Built fresh for every exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestPacket {
    /// Leap indicator, always "no warning" for a client
    pub leap: LeapIndicator,
    /// Protocol version announced to the server
    pub version: u8,
    /// Association mode
    pub mode: Mode,
}

impl Default for RequestPacket {
    fn default() -> Self {
        RequestPacket {
            leap: LeapIndicator::NoWarning,
            version: CLIENT_VERSION,
            mode: Mode::Client,
        }
    }
}

impl RequestPacket {
    /// Creates the standard version 3 client request
    pub fn new() -> Self {
        Self::default()
    }

    /// The packed LI/VN/mode byte, `0x1B` for the standard request
    pub fn first_byte(&self) -> u8 {
        (self.leap.code() << LEAP_SHIFT) | (self.version << VERSION_SHIFT) | self.mode.code()
    }

    /// Writes the 48-byte request into `dst`
    pub fn write<B: BufMut>(&self, dst: &mut B) {
        dst.put_u8(self.first_byte());
        dst.put_bytes(0, PACKET_SIZE - 1);
    }

    /// Encodes the request into a fixed buffer
    pub fn to_bytes(&self) -> [u8; PACKET_SIZE] {
        let mut bytes = [0u8; PACKET_SIZE];
        self.write(&mut &mut bytes[..]);
        bytes
    }
}

/// A server reply parsed into typed header fields
///
/// Parsing is independent of how the fields will later be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplyPacket {
    pub leap: LeapIndicator,
    pub version: u8,
    pub mode: Mode,
    pub stratum: Stratum,
    /// Poll exponent, read unsigned
    pub poll: u8,
    /// Precision exponent, read signed
    pub precision: i8,
    pub root_delay: ShortFormat,
    pub root_dispersion: ShortFormat,
    pub reference_id: ReferenceId,
    pub reference_timestamp: TimestampFormat,
    pub origin_timestamp: TimestampFormat,
    pub receive_timestamp: TimestampFormat,
    pub transmit_timestamp: TimestampFormat,
}

impl ReplyPacket {
    /// Parses the first 48 bytes of `bytes`
    ///
    /// Shorter input is rejected before any field is read.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < PACKET_SIZE {
            return Err(Error::too_short(bytes.len()));
        }

        let mut buf = &bytes[..PACKET_SIZE];
        let first = buf.get_u8();
        let stratum = Stratum::from(buf.get_u8());
        let poll = buf.get_u8();
        let precision = buf.get_i8();
        let root_delay = ShortFormat::read(&mut buf);
        let root_dispersion = ShortFormat::read(&mut buf);
        let mut reference_id = [0u8; 4];
        buf.copy_to_slice(&mut reference_id);

        Ok(ReplyPacket {
            leap: LeapIndicator::from_header(first),
            version: version_from_header(first),
            mode: Mode::from_header(first),
            stratum,
            poll,
            precision,
            root_delay,
            root_dispersion,
            reference_id: ReferenceId(reference_id),
            reference_timestamp: TimestampFormat::read(&mut buf),
            origin_timestamp: TimestampFormat::read(&mut buf),
            receive_timestamp: TimestampFormat::read(&mut buf),
            transmit_timestamp: TimestampFormat::read(&mut buf),
        })
    }
}
