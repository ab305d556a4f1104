//! Panel configuration from TOML (`[chat]` and `[generator]` sections)

use quill_application::PanelConfig;
use quill_domain::{GenerationConfig, Model};
use serde::{Deserialize, Serialize};

/// Model and tuning parameters for one panel.
///
/// Every field is optional; unset sampling parameters are left to the
/// service's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePanelConfig {
    /// Model name as string
    pub model: Option<String>,
    pub system_instruction: Option<String>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
    pub max_output_tokens: Option<u32>,
}

impl FilePanelConfig {
    /// Parse the model name; `None` when unset or blank.
    pub fn parse_model(&self) -> Option<Model> {
        let name = self.model.as_deref()?.trim();
        if name.is_empty() {
            return None;
        }
        let Ok(model) = name.parse::<Model>();
        Some(model)
    }

    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            max_output_tokens: self.max_output_tokens,
            system_instruction: self.system_instruction.clone(),
        }
    }

    /// Build the application-level panel config.
    pub fn to_panel_config(&self) -> PanelConfig {
        PanelConfig::new(self.parse_model().unwrap_or_default())
            .with_generation(self.generation_config())
    }
}
