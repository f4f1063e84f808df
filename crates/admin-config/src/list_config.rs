use crate::{ConfigError, ConfigErrorResult, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MIN_PAGE_SIZE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows per page in record tables
    pub page_size: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.page_size < MIN_PAGE_SIZE || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::list(format!(
                "list.page_size must be {}-{}, got {}",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE, self.page_size
            )));
        }
        Ok(())
    }
}
