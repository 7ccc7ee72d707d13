use std::{fs, path::Path};

use serde::Deserialize;
use tracing::Level;

use super::{DisplayOptions, Error, Result, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};

/// How decoded fields are printed by the command-line front end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned label/value table
    #[default]
    Text,
    /// One JSON object
    Json,
}

/// Optional settings file
///
/// Every key may be omitted; command-line flags take precedence.
///
/// ```toml
/// port = 123
/// timeout = 5
/// show_ipv4_form = true
/// milliseconds = false
/// log_level = "info"
/// format = "text"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Server port, signed so out-of-range values reach validation
    #[serde(default)]
    pub port: Option<i64>,
    /// Exchange deadline in seconds
    #[serde(default)]
    pub timeout: Option<i64>,
    #[serde(default)]
    pub show_ipv4_form: bool,
    #[serde(default)]
    pub milliseconds: bool,
    #[serde(default, deserialize_with = "super::serde::deserialize_level")]
    pub log_level: Option<Level>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Settings {
    /// Loads settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let buf = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::parse(&buf)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Parses settings from TOML text
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(e.to_string()))
    }

    /// Port to use when no flag overrides it
    pub fn port(&self) -> i64 {
        self.port.unwrap_or(i64::from(DEFAULT_PORT))
    }

    /// Timeout to use when no flag overrides it
    pub fn timeout(&self) -> i64 {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS as i64)
    }

    /// Display options from the file
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            show_ipv4_form: self.show_ipv4_form,
            milliseconds: self.milliseconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port(), 123);
        assert_eq!(settings.timeout(), 10);
        assert_eq!(settings.display_options(), DisplayOptions::default());
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_full_settings() {
        let settings = Settings::parse(
            r#"
            port = 1123
            timeout = -4
            show_ipv4_form = true
            milliseconds = true
            log_level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(settings.port(), 1123);
        assert_eq!(settings.timeout(), -4);
        assert!(settings.display_options().show_ipv4_form);
        assert!(settings.display_options().milliseconds);
        assert_eq!(settings.log_level, Some(Level::DEBUG));
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::parse("retries = 3").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/nonexistent/simple-ntp.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
