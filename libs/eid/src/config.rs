//! Process-wide Eid configuration.
//!
//! The defaults are fine for most programs. A binary that wants different
//! fingerprints or messages builds an [`EidConfig`] (from the environment or
//! any serde source) and calls [`EidConfig::install`] once at startup.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest accepted `uniq` length, in hex characters.
pub const MIN_UNIQ_LENGTH: usize = 8;

/// Longest accepted `uniq` length: a full SHA-256 digest in hex.
pub const MAX_UNIQ_LENGTH: usize = 64;

static INSTALLED: OnceLock<EidConfig> = OnceLock::new();
static DEFAULT: OnceLock<EidConfig> = OnceLock::new();

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable could not be parsed.
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    /// The fingerprint length is outside the supported range.
    #[error(
        "uniq length {length} out of range {}..={}",
        MIN_UNIQ_LENGTH,
        MAX_UNIQ_LENGTH
    )]
    UniqLengthOutOfRange { length: usize },

    /// The default message is empty.
    #[error("default message cannot be empty")]
    EmptyDefaultMessage,

    /// A configuration has already been installed.
    #[error("eid configuration already installed")]
    AlreadyInstalled,
}

/// Eid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EidConfig {
    /// Number of hex characters kept from the fingerprint digest.
    pub uniq_length: usize,

    /// Message used when a guard fails without one.
    pub default_message: String,

    /// Separator between the Eid and the text in log messages.
    pub log_message_separator: String,
}

impl Default for EidConfig {
    fn default() -> Self {
        Self {
            uniq_length: 16,
            default_message: "This should not happen".to_string(),
            log_message_separator: " => ".to_string(),
        }
    }
}

impl EidConfig {
    /// Load configuration from environment variables.
    ///
    /// - `EID_UNIQ_LENGTH`
    /// - `EID_DEFAULT_MESSAGE`
    /// - `EID_LOG_SEPARATOR`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("EID_UNIQ_LENGTH") {
            config.uniq_length = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    var: "EID_UNIQ_LENGTH",
                    value,
                })?;
        }
        if let Some(value) = lookup("EID_DEFAULT_MESSAGE") {
            config.default_message = value;
        }
        if let Some(value) = lookup("EID_LOG_SEPARATOR") {
            config.log_message_separator = value;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_UNIQ_LENGTH..=MAX_UNIQ_LENGTH).contains(&self.uniq_length) {
            return Err(ConfigError::UniqLengthOutOfRange {
                length: self.uniq_length,
            });
        }
        if self.default_message.is_empty() {
            return Err(ConfigError::EmptyDefaultMessage);
        }
        Ok(())
    }

    /// Installs this configuration for the rest of the process.
    ///
    /// Only the first call succeeds; Eids built before it use the defaults.
    pub fn install(self) -> Result<(), ConfigError> {
        self.validate()?;
        INSTALLED
            .set(self)
            .map_err(|_| ConfigError::AlreadyInstalled)
    }

    /// Returns the installed configuration, or the defaults.
    pub fn current() -> &'static EidConfig {
        INSTALLED
            .get()
            .unwrap_or_else(|| DEFAULT.get_or_init(EidConfig::default))
    }
}
