use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Where the persisted session (token and user info) lives
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Directory for session files; the config directory when unset
    pub storage_dir: Option<String>,
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(dir) = &self.storage_dir
            && dir.trim().is_empty()
        {
            return Err(ConfigError::session(
                "session.storage_dir cannot be empty when set",
            ));
        }
        Ok(())
    }
}
