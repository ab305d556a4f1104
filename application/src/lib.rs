//! Application layer for quill
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PanelConfig;
pub use ports::{
    llm_gateway::{FailureKind, GatewayError, LlmGateway, LlmSession, StreamHandle},
    transcript_observer::{NoObserver, TranscriptObserver},
};
pub use use_cases::chat_session::{ChatOutcome, ChatPhase, ChatSessionUseCase, ChatState};
pub use use_cases::generate::{GenerateUseCase, GeneratorState};
