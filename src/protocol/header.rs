use std::fmt;
use std::net::Ipv4Addr;

use serde::Serialize;

use super::{LEAP_MASK, LEAP_SHIFT, MODE_MASK, VERSION_MASK, VERSION_SHIFT};

/// A 2-bit code warning of an impending leap second
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum LeapIndicator {
    /// No leap required
    #[default]
    NoWarning = 0,
    /// Last minute of the day has 61 seconds
    AddOne = 1,
    /// Last minute of the day has 59 seconds
    SubOne = 2,
    /// Clock unsynchronized
    Unknown = 3,
}

impl LeapIndicator {
    /// Extracts the indicator from bits 7-6 of the first header byte
    pub fn from_header(first: u8) -> Self {
        match (first >> LEAP_SHIFT) & LEAP_MASK {
            0 => LeapIndicator::NoWarning,
            1 => LeapIndicator::AddOne,
            2 => LeapIndicator::SubOne,
            _ => LeapIndicator::Unknown,
        }
    }

    /// Numeric code as carried on the wire
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            LeapIndicator::NoWarning => "No Warning",
            LeapIndicator::AddOne => "Last minute of the day has 61 seconds",
            LeapIndicator::SubOne => "Last minute of the day has 59 seconds",
            LeapIndicator::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for LeapIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}

/// Extracts the version number from bits 5-3 of the first header byte
pub fn version_from_header(first: u8) -> u8 {
    (first >> VERSION_SHIFT) & VERSION_MASK
}

/// A 3-bit association mode; all eight values are defined
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Mode {
    Reserved = 0,
    SymmetricActive = 1,
    SymmetricPassive = 2,
    #[default]
    Client = 3,
    Server = 4,
    Broadcast = 5,
    NtpControlMessage = 6,
    ReservedForPrivateUse = 7,
}

impl Mode {
    /// Extracts the mode from bits 2-0 of the first header byte
    pub fn from_header(first: u8) -> Self {
        match first & MODE_MASK {
            0 => Mode::Reserved,
            1 => Mode::SymmetricActive,
            2 => Mode::SymmetricPassive,
            3 => Mode::Client,
            4 => Mode::Server,
            5 => Mode::Broadcast,
            6 => Mode::NtpControlMessage,
            _ => Mode::ReservedForPrivateUse,
        }
    }

    /// Numeric code as carried on the wire
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Reserved => "Reserved",
            Mode::SymmetricActive => "Symmetric Active",
            Mode::SymmetricPassive => "Symmetric Passive",
            Mode::Client => "Client",
            Mode::Server => "Server",
            Mode::Broadcast => "Broadcast",
            Mode::NtpControlMessage => "NTP Control Message",
            Mode::ReservedForPrivateUse => "Reserved for private use",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}

/// Distance from the reference clock, classified by range
///
/// ```text
/// 0       unspecified or invalid
/// 1       primary server
/// 2-15    secondary server
/// 16      unsynchronized
/// 17-255  reserved
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stratum {
    Unspecified,
    Primary,
    Secondary(u8),
    Unsynchronized,
    Reserved(u8),
}

impl From<u8> for Stratum {
    fn from(value: u8) -> Self {
        match value {
            0 => Stratum::Unspecified,
            1 => Stratum::Primary,
            2..=15 => Stratum::Secondary(value),
            16 => Stratum::Unsynchronized,
            _ => Stratum::Reserved(value),
        }
    }
}

impl Stratum {
    /// Raw stratum byte
    pub fn code(&self) -> u8 {
        match self {
            Stratum::Unspecified => 0,
            Stratum::Primary => 1,
            Stratum::Secondary(v) | Stratum::Reserved(v) => *v,
            Stratum::Unsynchronized => 16,
        }
    }

    /// Human-readable label
    pub fn description(&self) -> &'static str {
        match self {
            Stratum::Unspecified => "Unspecified or invalid",
            Stratum::Primary => "Primary Server",
            Stratum::Secondary(_) => "Secondary Server",
            Stratum::Unsynchronized => "Unsynchronized",
            Stratum::Reserved(_) => "Reserved",
        }
    }
}

impl fmt::Display for Stratum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.description())
    }
}

/// The 4-byte reference identifier, kept raw
///
/// Its meaning depends on the stratum, so interpretation is left to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ReferenceId(pub [u8; 4]);

impl ReferenceId {
    /// Reads the bytes as an ASCII clock code, dropping NUL padding
    pub fn as_ascii(&self) -> String {
        self.0
            .iter()
            .filter(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect()
    }

    /// Uppercase hex of the four bytes, e.g. `"1942E605"`
    pub fn as_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02X}", b)).collect()
    }

    /// The same bytes read as an IPv4 address
    ///
    /// Only a hint: the identifier need not be an address.
    pub fn as_ipv4(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_bits_0xdb() {
        // 11 011 011
        assert_eq!(LeapIndicator::from_header(0xDB), LeapIndicator::Unknown);
        assert_eq!(version_from_header(0xDB), 3);
        assert_eq!(Mode::from_header(0xDB), Mode::Client);
        assert_eq!(LeapIndicator::Unknown.to_string(), "3 (Unknown)");
        assert_eq!(Mode::Client.to_string(), "3 (Client)");
    }

    #[test]
    fn test_header_bits_server_reply() {
        // 00 100 100: v4 server
        assert_eq!(LeapIndicator::from_header(0x24), LeapIndicator::NoWarning);
        assert_eq!(version_from_header(0x24), 4);
        assert_eq!(Mode::from_header(0x24), Mode::Server);
    }

    #[test]
    fn test_every_mode_labelled() {
        let labels: Vec<String> = (0u8..8).map(|m| Mode::from_header(m).to_string()).collect();
        assert_eq!(
            labels,
            [
                "0 (Reserved)",
                "1 (Symmetric Active)",
                "2 (Symmetric Passive)",
                "3 (Client)",
                "4 (Server)",
                "5 (Broadcast)",
                "6 (NTP Control Message)",
                "7 (Reserved for private use)",
            ]
        );
    }

    #[test]
    fn test_leap_labels() {
        assert_eq!(LeapIndicator::from_header(0x00).to_string(), "0 (No Warning)");
        assert_eq!(
            LeapIndicator::from_header(0x40).to_string(),
            "1 (Last minute of the day has 61 seconds)"
        );
        assert_eq!(
            LeapIndicator::from_header(0x80).to_string(),
            "2 (Last minute of the day has 59 seconds)"
        );
    }

    #[test]
    fn test_stratum_boundaries() {
        assert_eq!(Stratum::from(0).to_string(), "0 (Unspecified or invalid)");
        assert_eq!(Stratum::from(1).to_string(), "1 (Primary Server)");
        assert_eq!(Stratum::from(2).to_string(), "2 (Secondary Server)");
        assert_eq!(Stratum::from(15).to_string(), "15 (Secondary Server)");
        assert_eq!(Stratum::from(16).to_string(), "16 (Unsynchronized)");
        assert_eq!(Stratum::from(17).to_string(), "17 (Reserved)");
        assert_eq!(Stratum::from(255).to_string(), "255 (Reserved)");
    }

    #[test]
    fn test_stratum_code_round_trips() {
        for value in 0..=255u8 {
            assert_eq!(Stratum::from(value).code(), value);
        }
    }

    #[test]
    fn test_reference_id_readings() {
        let gps = ReferenceId(*b"GPS\0");
        assert_eq!(gps.as_ascii(), "GPS");

        let id = ReferenceId([0x19, 0x42, 0xE6, 0x05]);
        assert_eq!(id.as_hex(), "1942E605");
        assert_eq!(id.as_ipv4().to_string(), "25.66.230.5");
    }
}
