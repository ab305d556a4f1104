//! One-shot generation use case
//!
//! Sends a prompt plus a mood instruction, waits for the complete result and
//! replaces whatever the generator panel showed before.

use crate::config::PanelConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use quill_domain::core::string::preview;
use quill_domain::{DomainError, GenerationConfig, GenerationOutput, GenerationRequest, Model, Mood, Prompt};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Generator panel state: the latest output and the in-flight flag.
#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    output: GenerationOutput,
    in_flight: bool,
}

impl GeneratorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &GenerationOutput {
        &self.output
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Admit a generation.
    ///
    /// Fails with [`DomainError::EmptyPrompt`] on blank input and
    /// [`DomainError::Busy`] while another generation runs; the state is left
    /// untouched in both cases.
    pub fn begin(&mut self, prompt: &str, mood: Mood) -> Result<GenerationRequest, DomainError> {
        if self.in_flight {
            return Err(DomainError::Busy);
        }
        let prompt = Prompt::try_new(prompt)?;
        self.in_flight = true;
        Ok(GenerationRequest::new(prompt, mood))
    }

    /// Record the result of the call, replacing the previous output.
    pub fn finish(&mut self, result: Result<String, GatewayError>) {
        self.output = match result {
            Ok(text) => GenerationOutput::from_text(text),
            Err(e) => GenerationOutput::Error(e.to_string()),
        };
        self.in_flight = false;
    }
}

/// Use case for one-shot generation
pub struct GenerateUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    config: GenerationConfig,
}

impl<G: LlmGateway + 'static> GenerateUseCase<G> {
    pub fn new(gateway: Arc<G>, panel: PanelConfig) -> Self {
        Self {
            gateway,
            model: panel.model,
            config: panel.generation,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Generate text for `prompt` in the given mood and store it in `state`.
    ///
    /// Returns an error only when the request is rejected before any call is
    /// made. Service failures end up in [`GeneratorState::output`].
    pub async fn generate(
        &self,
        state: &mut GeneratorState,
        prompt: &str,
        mood: Mood,
    ) -> Result<(), DomainError> {
        let request = state.begin(prompt, mood).inspect_err(|e| {
            debug!("Generation rejected: {}", e);
        })?;

        info!(
            model = %self.model,
            mood = %request.mood,
            prompt = %preview(request.prompt.content(), 60),
            "Generating"
        );

        let result = self
            .gateway
            .generate_once(&self.model, &request.to_request_text(), &self.config)
            .await;

        match &result {
            Ok(text) => info!(bytes = text.len(), "Generation complete"),
            Err(e) => warn!("Generation failed: {}", e),
        }
        state.finish(result);
        Ok(())
    }
}
