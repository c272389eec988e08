//! Sniffer configuration, resolved once from the environment at startup.

use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Environment variable that enables the sniffer integration.
pub const ENABLE_ENV_VAR: &str = "MAMORU_SNIFFER_ENABLE";

/// Environment variable that overrides [`DEFAULT_DELTA`].
pub const DELTA_ENV_VAR: &str = "MAMORU_SNIFFER_DELTA";

/// The default number of blocks the node can lag behind the highest known
/// block, and still be treated as synced.
pub const DEFAULT_DELTA: i64 = 10;

/// An invalid sniffer environment variable value.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("{var} must be \"1\", \"true\", \"0\", \"false\" or empty, got {value:?}")]
    InvalidFlag { var: &'static str, value: String },

    #[error("{var} must be a signed 64-bit integer, got {value:?}: {source}")]
    InvalidDelta {
        var: &'static str,
        value: String,
        source: ParseIntError,
    },
}

/// Sniffer configuration.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Report to the sniffer service when all the other requirements are met.
    pub enable: bool,

    /// Maximum number of blocks the node can be behind the highest known block,
    /// and still be considered synced.
    ///
    /// Negative values require the node to be ahead of the reported highest block.
    pub delta: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enable: false,
            delta: DEFAULT_DELTA,
        }
    }
}

impl Config {
    /// Resolves the config from [`ENABLE_ENV_VAR`] and [`DELTA_ENV_VAR`].
    ///
    /// Invalid values fall back to the defaults, see [`Config::from_env_with`].
    pub fn from_env() -> Self {
        Self::from_env_with(|var| std::env::var(var).ok())
    }

    /// Resolves the config using `lookup` to read environment variables.
    ///
    /// Never fails: an unrecognised enable flag disables the sniffer, and an
    /// unparsable delta is replaced by [`DEFAULT_DELTA`].
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            enable: Self::enable_from(&lookup),
            delta: Self::delta_from(&lookup),
        }
    }

    /// Reads the enable flag using `lookup`.
    pub fn enable_from(lookup: impl Fn(&str) -> Option<String>) -> bool {
        let Some(value) = lookup(ENABLE_ENV_VAR) else {
            return false;
        };

        parse_enable_flag(&value).unwrap_or_else(|error| {
            debug!(%error, "sniffer disabled by unrecognised enable flag");
            false
        })
    }

    /// Reads the block delta using `lookup`.
    pub fn delta_from(lookup: impl Fn(&str) -> Option<String>) -> i64 {
        let Some(value) = lookup(DELTA_ENV_VAR) else {
            return DEFAULT_DELTA;
        };

        parse_delta(&value).unwrap_or_else(|error| {
            debug!(%error, default = DEFAULT_DELTA, "using default sniffer delta");
            DEFAULT_DELTA
        })
    }
}

/// Returns `true` if the sniffer is enabled in the process environment.
pub fn is_enabled() -> bool {
    Config::enable_from(|var| std::env::var(var).ok())
}

/// Returns the block delta from the process environment, or [`DEFAULT_DELTA`].
pub fn get_delta() -> i64 {
    Config::delta_from(|var| std::env::var(var).ok())
}

/// Parses an enable flag value.
///
/// Only the exact strings `"1"` and `"true"` enable the sniffer.
pub fn parse_enable_flag(value: &str) -> Result<bool, ConfigError> {
    match value {
        "1" | "true" => Ok(true),
        "" | "0" | "false" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: ENABLE_ENV_VAR,
            value: value.to_string(),
        }),
    }
}

/// Parses a block delta value.
pub fn parse_delta(value: &str) -> Result<i64, ConfigError> {
    value
        .parse::<i64>()
        .map_err(|source| ConfigError::InvalidDelta {
            var: DELTA_ENV_VAR,
            value: value.to_string(),
            source,
        })
}
