use bytes::Buf;
use serde::Serialize;

/// 2^16, the scale of the short format fraction
const SHORT_FRACTION_SCALE: f64 = 65_536.0;

/// 2^32, the scale of the timestamp format fraction
const TIMESTAMP_FRACTION_SCALE: f64 = 4_294_967_296.0;

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// **NTP Short Format** - 16-bit unsigned seconds and a 16-bit fraction.
///
/// Used by the root delay and root dispersion header fields.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Seconds              |           Fraction            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ShortFormat {
    /// Whole seconds
    pub seconds: u16,
    /// Fraction in units of 2^-16 seconds
    pub fraction: u16,
}

impl ShortFormat {
    /// Encoded size in bytes
    pub const SIZE: usize = 4;

    /// Builds a value from its big-endian encoding
    pub fn from_be_bytes(bytes: [u8; 4]) -> Self {
        Self::read(&mut &bytes[..])
    }

    /// Reads a value from the front of `buf`
    ///
    /// The caller guarantees at least [`Self::SIZE`] bytes remain.
    pub fn read<B: Buf>(buf: &mut B) -> Self {
        ShortFormat {
            seconds: buf.get_u16(),
            fraction: buf.get_u16(),
        }
    }

    /// Value in seconds
    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.seconds) + f64::from(self.fraction) / SHORT_FRACTION_SCALE
    }
}

/// **NTP Timestamp Format** - 32-bit unsigned seconds since 1900-01-01 00:00:00 UTC
/// and a 32-bit fraction resolving about 232 picoseconds.
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            Seconds                            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            Fraction                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimestampFormat {
    /// Seconds since the NTP prime epoch
    pub seconds: u32,
    /// Fraction in units of 2^-32 seconds
    pub fraction: u32,
}

impl TimestampFormat {
    /// Encoded size in bytes
    pub const SIZE: usize = 8;

    /// Builds a value from its big-endian encoding
    pub fn from_be_bytes(bytes: [u8; 8]) -> Self {
        Self::read(&mut &bytes[..])
    }

    /// Reads a value from the front of `buf`
    ///
    /// The caller guarantees at least [`Self::SIZE`] bytes remain.
    pub fn read<B: Buf>(buf: &mut B) -> Self {
        TimestampFormat {
            seconds: buf.get_u32(),
            fraction: buf.get_u32(),
        }
    }

    /// Value in seconds since the NTP prime epoch
    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.seconds) + f64::from(self.fraction) / TIMESTAMP_FRACTION_SCALE
    }

    /// Fraction converted to nanoseconds, rounded to nearest
    ///
    /// Fractions within half a nanosecond of a full second round up to
    /// exactly 1_000_000_000; [`super::epoch::to_unix`] carries that into the seconds.
    pub fn fraction_nanos(&self) -> u32 {
        let scaled = u64::from(self.fraction) * NANOS_PER_SEC + (1 << 31);
        (scaled >> 32) as u32
    }
}
