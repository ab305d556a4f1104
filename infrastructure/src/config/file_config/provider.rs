//! Provider configuration from TOML (`[provider]` section)

use crate::gemini::transport::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, TransportSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL up to and including `/models`.
    pub base_url: String,
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Timeout in seconds for connecting and for each wait on the service.
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileProviderConfig {
    pub fn transport_settings(&self) -> TransportSettings {
        TransportSettings {
            base_url: self.base_url.clone(),
            api_key_env: self.api_key_env.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_settings() {
        let config = FileProviderConfig {
            timeout_seconds: 5,
            ..FileProviderConfig::default()
        };
        let settings = config.transport_settings();
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }
}
