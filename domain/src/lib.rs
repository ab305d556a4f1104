//! Domain layer for quill
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! The chat panel's ordered message list. A model reply grows in place as
//! fragments stream in; at most one trailing reply is ever in progress.
//!
//! ## One-shot generation
//!
//! A prompt plus a [`Mood`] produces one complete result that replaces
//! whatever the generator panel showed before.

pub mod config;
pub mod core;
pub mod generation;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use config::{GenerationConfig, OutputFormat};
pub use core::{error::DomainError, model::Model, prompt::Prompt};
pub use generation::{mood::Mood, output::GenerationOutput, request::GenerationRequest};
pub use render::markdown::{MarkupStyle, to_html};
pub use session::{
    context::ConversationContext,
    entities::{Message, Sender},
    stream::StreamEvent,
    transcript::Transcript,
};
