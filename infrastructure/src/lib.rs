//! Infrastructure layer for quill
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FilePanelConfig,
    FileProviderConfig, FileReplConfig,
};
pub use gemini::{
    error::{GeminiError, Result},
    gateway::GeminiGateway,
    session::GeminiSession,
    transport::{HttpTransport, TransportSettings},
};
