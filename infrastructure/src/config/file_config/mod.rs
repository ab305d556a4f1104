//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod panel;
mod provider;
mod repl;

pub use output::FileOutputConfig;
pub use panel::FilePanelConfig;
pub use provider::FileProviderConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("{0}.model cannot be empty")]
    EmptyModelName(&'static str),

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API connection settings
    pub provider: FileProviderConfig,
    /// Chat panel model and tuning
    pub chat: FilePanelConfig,
    /// One-shot generator model and tuning
    pub generator: FilePanelConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.provider.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if self.provider.base_url.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyBaseUrl);
        }
        for (section, panel) in [("chat", &self.chat), ("generator", &self.generator)] {
            if panel.model.as_deref().is_some_and(|m| m.trim().is_empty()) {
                issues.push(ConfigValidationError::EmptyModelName(section));
            }
        }

        issues
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
