use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Error, Result, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};

/// Rendering switches for the decoded fields
///
/// These only change how values are printed, never the parsed values themselves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Append a dotted-decimal reading of the reference ID (stratum other than 1)
    pub show_ipv4_form: bool,
    /// Render precision, root delay and root dispersion in milliseconds
    pub milliseconds: bool,
}

/// Raw query parameters as typed by a user
///
/// Port and timeout are kept signed so out-of-range input can be detected
/// and replaced instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryInput {
    /// Server host name or address
    pub host: String,
    /// Server port
    pub port: i64,
    /// Overall exchange deadline in seconds
    pub timeout_secs: i64,
}

impl QueryInput {
    /// Creates input for `host` with the default port and timeout
    pub fn new(host: impl Into<String>) -> Self {
        QueryInput {
            host: host.into(),
            port: i64::from(DEFAULT_PORT),
            timeout_secs: DEFAULT_TIMEOUT_SECS as i64,
        }
    }

    /// Checks the input and substitutes defaults for out-of-range values
    pub fn validate(&self) -> Result<QueryTarget> {
        let host = self.host.trim();
        if host.is_empty() {
            return Err(Error::validation("NTP server host is empty"));
        }

        let port = match u16::try_from(self.port) {
            Ok(port) => port,
            Err(_) => {
                warn!(port = self.port, fallback = DEFAULT_PORT, "port out of range, using default");
                DEFAULT_PORT
            }
        };

        let timeout = if self.timeout_secs > 0 {
            Duration::from_secs(self.timeout_secs as u64)
        } else {
            warn!(
                timeout = self.timeout_secs,
                fallback = DEFAULT_TIMEOUT_SECS,
                "timeout not positive, using default"
            );
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        };

        Ok(QueryTarget {
            host: host.to_string(),
            port,
            timeout,
        })
    }
}

/// A validated query destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryTarget {
    /// Server host name or address, trimmed and non-empty
    pub host: String,
    /// Server port
    pub port: u16,
    /// Deadline for the whole exchange
    #[serde(serialize_with = "super::serde::serialize_duration")]
    pub timeout: Duration,
}

impl QueryTarget {
    /// Creates a target, bypassing input substitution
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        QueryTarget {
            host: host.into(),
            port,
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let target = QueryInput::new("time.example.com").validate().unwrap();
        assert_eq!(target.host, "time.example.com");
        assert_eq!(target.port, 123);
        assert_eq!(target.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_empty_host_rejected() {
        let input = QueryInput::new("   ");
        let err = input.validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_host_trimmed() {
        let target = QueryInput::new("  ntp.example.org \n").validate().unwrap();
        assert_eq!(target.host, "ntp.example.org");
    }

    #[test]
    fn test_port_substitution() {
        for port in [-1, 65536, i64::MAX] {
            let input = QueryInput { port, ..QueryInput::new("h") };
            assert_eq!(input.validate().unwrap().port, DEFAULT_PORT);
        }

        let input = QueryInput { port: 0, ..QueryInput::new("h") };
        assert_eq!(input.validate().unwrap().port, 0);

        let input = QueryInput { port: 65535, ..QueryInput::new("h") };
        assert_eq!(input.validate().unwrap().port, 65535);
    }

    #[test]
    fn test_timeout_substitution() {
        for timeout_secs in [0, -1, -30] {
            let input = QueryInput { timeout_secs, ..QueryInput::new("h") };
            assert_eq!(input.validate().unwrap().timeout, Duration::from_secs(10));
        }

        let input = QueryInput { timeout_secs: 2, ..QueryInput::new("h") };
        assert_eq!(input.validate().unwrap().timeout, Duration::from_secs(2));
    }
}
