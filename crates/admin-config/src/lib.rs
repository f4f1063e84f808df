mod api_config;
mod config;
mod error;
mod list_config;
mod log_level;
mod logging_config;
mod notice_config;
mod session_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use list_config::ListConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use notice_config::NoticeConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "ADMIN_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".admin";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://localhost:8000/admin";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

const DEFAULT_PAGE_SIZE: usize = 10;
const MIN_PAGE_SIZE: usize = 1;
const MAX_PAGE_SIZE: usize = 500;

const DEFAULT_SUCCESS_NOTICE_MS: u64 = 3000;
const DEFAULT_ERROR_NOTICE_MS: u64 = 5000;
const MIN_NOTICE_MS: u64 = 500;
const MAX_NOTICE_MS: u64 = 60_000;

const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
