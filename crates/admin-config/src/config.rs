use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR_NAME, ListConfig, LoggingConfig, NoticeConfig, SessionConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub list: ListConfig,
    pub notice: NoticeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ADMIN_CONFIG_DIR env var, else use ./.admin/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply ADMIN_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ADMIN_CONFIG_DIR env var > ./.admin/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR_NAME))
    }

    /// Directory holding persisted session files.
    pub fn session_dir(&self) -> ConfigErrorResult<PathBuf> {
        match &self.session.storage_dir {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => Self::config_dir(),
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.api.validate()?;
        self.session.validate()?;
        self.list.validate()?;
        self.notice.validate()?;
        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  api: {} (timeout {}s)",
            self.api.base_url, self.api.timeout_secs
        );
        info!(
            "  session: {}",
            self.session.storage_dir.as_deref().unwrap_or("<config dir>")
        );
        info!("  list: page_size={}", self.list.page_size);
        info!(
            "  notice: success={}ms, error={}ms",
            self.notice.success_ms, self.notice.error_ms
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("<stderr>")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("ADMIN_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_parse("ADMIN_API_TIMEOUT_SECS", &mut self.api.timeout_secs);

        // Session
        Self::apply_env_option_string("ADMIN_SESSION_DIR", &mut self.session.storage_dir);

        // List
        Self::apply_env_parse("ADMIN_LIST_PAGE_SIZE", &mut self.list.page_size);

        // Notice
        Self::apply_env_parse("ADMIN_NOTICE_SUCCESS_MS", &mut self.notice.success_ms);
        Self::apply_env_parse("ADMIN_NOTICE_ERROR_MS", &mut self.notice.error_ms);

        // Logging
        Self::apply_env_parse("ADMIN_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ADMIN_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ADMIN_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
