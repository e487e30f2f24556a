//! Library configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! changes:
//!
//! ```toml
//! [format]
//! default_digits = 4
//!
//! [log]
//! debug = true
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::si::{DEFAULT_DIGITS, FormatSpec, MAX_DIGITS};

/// How long on-screen messages stay up unless configured otherwise
pub const DEFAULT_SCREEN_MESSAGE_SECS: f32 = 4.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: FormatConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Significant figures used when a caller does not ask for a count
    pub default_digits: u32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            default_digits: DEFAULT_DIGITS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Emit debug messages, debug loggers and debug field activation
    pub debug: bool,
    /// Lifetime of on-screen messages in seconds
    pub screen_message_secs: f32,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            screen_message_secs: DEFAULT_SCREEN_MESSAGE_SECS,
        }
    }
}

impl LogConfig {
    /// Screen message lifetime; falls back to the default for negative or non-finite values
    pub fn screen_message_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.screen_message_secs)
            .unwrap_or_else(|_| Duration::from_secs_f32(DEFAULT_SCREEN_MESSAGE_SECS))
    }
}

impl Config {
    /// Create a new configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// The SI format used when a caller gives no explicit token
    pub fn default_spec(&self) -> FormatSpec {
        FormatSpec::new(self.format.default_digits.clamp(1, MAX_DIGITS))
    }
}

/// Builder for Config
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    default_digits: Option<u32>,
    debug: Option<bool>,
    screen_message_secs: Option<f32>,
}

impl ConfigBuilder {
    /// Set the default number of significant figures
    pub fn default_digits(mut self, digits: u32) -> Self {
        self.default_digits = Some(digits);
        self
    }

    /// Enable or disable debug output
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }

    /// Set how long on-screen messages stay visible
    pub fn screen_message_secs(mut self, secs: f32) -> Self {
        self.screen_message_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let default = Config::default();
        Config {
            format: FormatConfig {
                default_digits: self
                    .default_digits
                    .unwrap_or(default.format.default_digits),
            },
            log: LogConfig {
                debug: self.debug.unwrap_or(default.log.debug),
                screen_message_secs: self
                    .screen_message_secs
                    .unwrap_or(default.log.screen_message_secs),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format.default_digits, 3);
        assert!(!config.log.debug);
        assert_eq!(config.log.screen_message_duration(), Duration::from_secs(4));
        assert_eq!(config.default_spec(), FormatSpec::new(3));
    }

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .default_digits(5)
            .debug(true)
            .screen_message_secs(2.5)
            .build();
        assert_eq!(config.format.default_digits, 5);
        assert!(config.log.debug);
        assert_eq!(
            config.log.screen_message_duration(),
            Duration::from_millis(2500)
        );
    }

    #[test]
    fn test_invalid_duration_falls_back() {
        let config = Config::builder().screen_message_secs(-1.0).build();
        assert_eq!(config.log.screen_message_duration(), Duration::from_secs(4));
    }

    #[test]
    fn test_zero_digits_still_yields_valid_spec() {
        let config = Config::builder().default_digits(0).build();
        assert_eq!(config.default_spec().digits, 1);
    }

    #[test]
    fn test_oversized_digits_are_capped() {
        let config = Config::builder().default_digits(70_000).build();
        assert_eq!(config.default_spec().digits, MAX_DIGITS);
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"log":{"debug":true}}"#).unwrap();
        assert!(config.log.debug);
        assert_eq!(config.log.screen_message_secs, DEFAULT_SCREEN_MESSAGE_SECS);
        assert_eq!(config.format.default_digits, 3);
    }
}
