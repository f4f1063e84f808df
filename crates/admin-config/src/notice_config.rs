use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ERROR_NOTICE_MS, DEFAULT_SUCCESS_NOTICE_MS,
    MAX_NOTICE_MS, MIN_NOTICE_MS,
};

use std::time::Duration;

use serde::Deserialize;

/// How long transient notices stay visible
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    pub success_ms: u64,
    pub error_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            success_ms: DEFAULT_SUCCESS_NOTICE_MS,
            error_ms: DEFAULT_ERROR_NOTICE_MS,
        }
    }
}

impl NoticeConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [("success_ms", self.success_ms), ("error_ms", self.error_ms)] {
            if !(MIN_NOTICE_MS..=MAX_NOTICE_MS).contains(&value) {
                return Err(ConfigError::notice(format!(
                    "notice.{} must be {}-{}, got {}",
                    name, MIN_NOTICE_MS, MAX_NOTICE_MS, value
                )));
            }
        }
        Ok(())
    }

    pub fn success_duration(&self) -> Duration {
        Duration::from_millis(self.success_ms)
    }

    pub fn error_duration(&self) -> Duration {
        Duration::from_millis(self.error_ms)
    }
}
