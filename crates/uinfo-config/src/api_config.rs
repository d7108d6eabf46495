use crate::{ConfigError, ConfigErrorResult, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PAGE_SIZE};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Upper bound on the multipart upload body, in bytes
    pub max_upload_bytes: usize,
    /// Listing page size used when the limit query parameter is omitted
    pub default_page_size: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::api("api.max_upload_bytes must be positive"));
        }

        if self.default_page_size <= 0 {
            return Err(ConfigError::api(format!(
                "api.default_page_size must be positive, got {}",
                self.default_page_size
            )));
        }

        Ok(())
    }
}
