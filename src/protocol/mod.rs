//! NTP packet layout and decoding
//!
//! This module defines the client request, the parsed reply, the header
//! enumerations and the renderer that turns a reply into display strings.
//!
//! The first header byte packs three fields:
//!
//! ```text
//!  7 6 5 4 3 2 1 0
//! +-+-+-+-+-+-+-+-+
//! |LI | VN  |Mode |
//! +-+-+-+-+-+-+-+-+
//! ```

pub mod codec;
pub mod fields;
pub mod header;
pub mod message;

pub use self::codec::PacketCodec;
pub use self::fields::{decode, DecodedFields, FIELD_LABELS};
pub use self::header::{LeapIndicator, Mode, ReferenceId, Stratum};
pub use self::message::{ReplyPacket, RequestPacket};

/// Bit offset of the leap indicator in the first header byte
pub const LEAP_SHIFT: u8 = 6;

/// Leap indicator width mask, applied after shifting
pub const LEAP_MASK: u8 = 0b11;

/// Bit offset of the version number in the first header byte
pub const VERSION_SHIFT: u8 = 3;

/// Version number width mask, applied after shifting
pub const VERSION_MASK: u8 = 0b111;

/// Mode occupies the low three bits
pub const MODE_MASK: u8 = 0b111;

/// Version announced in client requests
pub const CLIENT_VERSION: u8 = 3;
