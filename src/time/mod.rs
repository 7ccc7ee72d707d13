//! Fixed-point time formats used in the NTP header
//!
//! - [`ShortFormat`]: 16.16 seconds, used by root delay and root dispersion
//! - [`TimestampFormat`]: 32.32 seconds since 1900-01-01, used by the four timestamps
//! - [`epoch`]: conversion from the NTP prime epoch to Unix time and RFC 3339 text
//!
//! # Examples
//!
//! ```
//! use simple_ntp::time::{epoch, TimestampFormat};
//!
//! let ts = TimestampFormat::from_be_bytes([0x83, 0xAA, 0x7E, 0x80, 0, 0, 0, 0]);
//! assert_eq!(epoch::to_rfc3339(&ts).unwrap(), "1970-01-01T00:00:00.000000000Z");
//! ```

pub mod epoch;
mod format;

pub use self::format::{ShortFormat, TimestampFormat};
