//! Generation tuning parameters

use serde::{Deserialize, Serialize};

/// Tuning parameters passed through to the text-generation service.
///
/// Every field is optional and forwarded as-is. No range checks happen here;
/// the service is the authority on what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    pub max_output_tokens: Option<u32>,
    pub system_instruction: Option<String>,
}

impl GenerationConfig {
    /// True when any sampling parameter is set (system instruction aside).
    pub fn has_sampling_params(&self) -> bool {
        self.temperature.is_some()
            || self.top_p.is_some()
            || self.top_k.is_some()
            || self.max_output_tokens.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let config = GenerationConfig::default();
        assert!(!config.has_sampling_params());
        assert!(config.system_instruction.is_none());
    }

    #[test]
    fn test_sampling_params_ignore_system_instruction() {
        let config = GenerationConfig {
            system_instruction: Some("You are a storyteller.".to_string()),
            ..GenerationConfig::default()
        };
        assert!(!config.has_sampling_params());

        let config = GenerationConfig {
            top_k: Some(40),
            ..config
        };
        assert!(config.has_sampling_params());
    }
}
