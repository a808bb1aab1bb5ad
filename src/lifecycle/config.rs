//! Settings read from the environment.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::codec::ParseMode;

pub const DATA_FILE_VAR: &str = "REGISTRY_DATA_FILE";
pub const PARSE_MODE_VAR: &str = "REGISTRY_PARSE_MODE";
pub const CHANNEL_CAPACITY_VAR: &str = "REGISTRY_CHANNEL_CAPACITY";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Where the demo saves and reloads the store.
    pub data_file: PathBuf,
    pub parse_mode: ParseMode,
    /// Mailbox size of the store actor.
    pub channel_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("system_data.txt"),
            parse_mode: ParseMode::Lenient,
            channel_capacity: 32,
        }
    }
}

impl RegistryConfig {
    /// Reads the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup, for tests.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = lookup(DATA_FILE_VAR) {
            config.data_file = PathBuf::from(path);
        }
        if let Some(mode) = lookup(PARSE_MODE_VAR) {
            config.parse_mode = mode.parse::<ParseMode>().map_err(|reason| ConfigError::Invalid {
                var: PARSE_MODE_VAR,
                reason,
            })?;
        }
        if let Some(capacity) = lookup(CHANNEL_CAPACITY_VAR) {
            config.channel_capacity = match capacity.parse::<usize>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        var: CHANNEL_CAPACITY_VAR,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(n) => n,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: CHANNEL_CAPACITY_VAR,
                        reason: e.to_string(),
                    })
                }
            };
        }
        Ok(config)
    }
}
