//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - available Gemini models
//! - [`prompt::Prompt`] - a validated, non-blank piece of user input
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
pub mod string;
