use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS,
    MIN_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Backend REST API location
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Admin base URL, including the `/admin` path
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::api(format!(
                "api.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Scheme, host and port of `base_url`, e.g. `http://localhost:8000`.
    ///
    /// Persisted session state is scoped to this value.
    pub fn origin(&self) -> &str {
        let after_scheme = self.base_url.find("://").map_or(0, |i| i + 3);
        match self.base_url[after_scheme..].find('/') {
            Some(slash) => &self.base_url[..after_scheme + slash],
            None => self.base_url.trim_end_matches('/'),
        }
    }
}
