//! Log verbosity as written in `config.toml` or `ADMIN_LOG_LEVEL`.

use crate::{ConfigError, DEFAULT_LOG_LEVEL};

use std::ops::Deref;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Deserializer};

/// A [`LevelFilter`] that never fails a config load: a missing, non-string
/// or unrecognized value deserializes to the default level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLevel(pub LevelFilter);

impl Default for LogLevel {
    fn default() -> Self {
        Self(DEFAULT_LOG_LEVEL)
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer).ok().flatten();
        Ok(raw
            .and_then(|name| name.parse().ok())
            .unwrap_or_default())
    }
}

/// Case-insensitive level name: off, error, warn, info, debug or trace.
impl FromStr for LogLevel {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LevelFilter::from_str(name).map(LogLevel).map_err(|_| {
            ConfigError::logging(format!(
                "unknown log level '{name}' (expected off, error, warn, info, debug or trace)"
            ))
        })
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.as_str().to_lowercase())
    }
}

impl Deref for LogLevel {
    type Target = LevelFilter;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}
