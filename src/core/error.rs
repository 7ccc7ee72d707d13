use std::io;
use std::time::Duration;
use thiserror::Error;

/// Custom error types for simple-ntp
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Resolution error: {0}")]
    Resolution(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timed out after {} seconds waiting for a reply", .0.as_secs())]
    Timeout(Duration),

    #[error("Reply too short: received {received} bytes, expected at least {expected}")]
    PacketTooShort {
        /// Bytes actually available
        received: usize,
        /// Bytes required for a full header
        expected: usize,
    },

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type alias using our custom Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse failure category, used by callers to pick a message prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Rejected before any network activity
    Validation,
    /// Resolution, socket or deadline failure
    Transport,
    /// Reply could not be decoded
    Decode,
}

impl Error {
    /// Creates a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Creates a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Creates a new resolution error
    pub fn resolution(msg: impl Into<String>) -> Self {
        Error::Resolution(msg.into())
    }

    /// Creates a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Error::Network(msg.into())
    }

    /// Creates a new decode error
    pub fn decode(msg: impl Into<String>) -> Self {
        Error::Decode(msg.into())
    }

    /// Creates a decode fault for a reply of `received` bytes
    pub fn too_short(received: usize) -> Self {
        Error::PacketTooShort {
            received,
            expected: super::PACKET_SIZE,
        }
    }

    /// Returns the category this error belongs to
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::Validation(_) | Error::Config(_) => ErrorClass::Validation,
            Error::Io(_) | Error::Resolution(_) | Error::Network(_) | Error::Timeout(_) => {
                ErrorClass::Transport
            }
            Error::PacketTooShort { .. } | Error::Decode(_) => ErrorClass::Decode,
        }
    }
}
