//! Gemini LLM Gateway implementation

use crate::gemini::error::{GeminiError, Result};
use crate::gemini::protocol::GenerateContentRequest;
use crate::gemini::session::GeminiSession;
use crate::gemini::transport::{HttpTransport, TransportSettings};
use async_trait::async_trait;
use quill_application::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use quill_domain::{GenerationConfig, Model};
use std::sync::Arc;
use tracing::{debug, info};

/// LLM Gateway implementation for the Gemini REST API
pub struct GeminiGateway {
    transport: Arc<HttpTransport>,
}

impl GeminiGateway {
    /// Create a gateway, reading the API key from the environment.
    pub fn new(settings: TransportSettings) -> Result<Self> {
        let transport = HttpTransport::from_env(settings)?;
        if transport.has_api_key() {
            info!("GeminiGateway initialized");
        } else {
            info!("GeminiGateway initialized without an API key");
        }
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Create a gateway with an existing transport
    pub fn with_transport(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    async fn create_session(
        &self,
        model: &Model,
        config: &GenerationConfig,
    ) -> std::result::Result<Box<dyn LlmSession>, GatewayError> {
        // Fail at setup rather than on the first message
        self.transport.api_key()?;
        debug!(%model, "Creating Gemini session");

        Ok(Box::new(GeminiSession::new(
            Arc::clone(&self.transport),
            model.clone(),
            config.clone(),
        )))
    }

    async fn generate_once(
        &self,
        model: &Model,
        prompt: &str,
        config: &GenerationConfig,
    ) -> std::result::Result<String, GatewayError> {
        let request = GenerateContentRequest::single(prompt, config);
        let response = self.transport.generate(model, &request).await?;

        if let Some(reason) = response.block_reason() {
            return Err(GeminiError::Blocked(reason.to_string()).into());
        }
        Ok(response.text())
    }

    async fn available_models(&self) -> std::result::Result<Vec<Model>, GatewayError> {
        let listing = self.transport.list_models().await?;
        let models = listing
            .models
            .iter()
            .filter(|info| info.supports_generate_content())
            .map(|info| {
                let Ok(model) = info.id().parse::<Model>();
                model
            })
            .collect();
        Ok(models)
    }
}
