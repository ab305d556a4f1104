//! Application-level configuration.
//!
//! Each panel talks to one model with its own tuning parameters.

use quill_domain::{GenerationConfig, Model};

/// Model and tuning parameters for one panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelConfig {
    pub model: Model,
    pub generation: GenerationConfig,
}

impl PanelConfig {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            generation: GenerationConfig::default(),
        }
    }

    pub fn with_generation(mut self, generation: GenerationConfig) -> Self {
        self.generation = generation;
        self
    }

    /// Replace the model, keeping tuning parameters.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_model_keeps_generation() {
        let config = PanelConfig::new(Model::Gemini15Flash)
            .with_generation(GenerationConfig {
                temperature: Some(0.2),
                ..GenerationConfig::default()
            })
            .with_model(Model::Gemini25Pro);

        assert_eq!(config.model, Model::Gemini25Pro);
        assert_eq!(config.generation.temperature, Some(0.2));
    }
}
