//! LLM Gateway port
//!
//! Defines the interface for communicating with the text-generation service.

use async_trait::async_trait;
use quill_domain::{ConversationContext, GenerationConfig, Model, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Session error: {0}")]
    SessionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Stream failed: {0}")]
    StreamFailed(String),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Where in the request lifecycle a failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The session could not be created.
    Setup,
    /// The stream broke after it started; partial output may exist.
    Stream,
    /// The request failed outright.
    Request,
}

impl GatewayError {
    pub fn kind(&self) -> FailureKind {
        match self {
            GatewayError::SessionError(_) => FailureKind::Setup,
            GatewayError::StreamFailed(_) => FailureKind::Stream,
            GatewayError::ConnectionError(_)
            | GatewayError::RequestFailed(_)
            | GatewayError::Blocked(_)
            | GatewayError::Timeout
            | GatewayError::Other(_) => FailureKind::Request,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to the text-generation
/// service. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a session bound to a model and its tuning parameters.
    ///
    /// The session does not own conversation history; callers pass the
    /// context with every request.
    async fn create_session(
        &self,
        model: &Model,
        config: &GenerationConfig,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// Send a single prompt and wait for the complete response.
    async fn generate_once(
        &self,
        model: &Model,
        prompt: &str,
        config: &GenerationConfig,
    ) -> Result<String, GatewayError>;

    /// Get available models
    async fn available_models(&self) -> Result<Vec<Model>, GatewayError>;
}

/// Handle for receiving streaming events from an LLM session.
///
/// Wraps an `mpsc::Receiver<StreamEvent>`. The stream is finite and cannot
/// be restarted.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message after the given context and stream the reply.
    async fn send_streaming(
        &self,
        context: &ConversationContext,
        content: &str,
    ) -> Result<StreamHandle, GatewayError>;
}
