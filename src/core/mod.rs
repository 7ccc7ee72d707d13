//! Core types and constants for simple-ntp
//!
//! This module contains the building blocks shared by the transport, the decoder
//! and the command-line front end.

pub mod config;
pub mod error;
pub mod logging;
pub mod serde;
pub mod types;

pub use self::config::{OutputFormat, Settings};
pub use self::error::{Error, ErrorClass, Result};
pub use self::types::{DisplayOptions, QueryInput, QueryTarget};

/// Size of an NTP header without extension fields or MAC
pub const PACKET_SIZE: usize = 48;

/// Well-known NTP server port
pub const DEFAULT_PORT: u16 = 123;

/// Timeout applied when the caller gives none (or a non-positive one)
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Seconds between the NTP prime epoch (1900-01-01) and the Unix epoch (1970-01-01)
pub const NTP_UNIX_OFFSET: i64 = 2_208_988_800;
