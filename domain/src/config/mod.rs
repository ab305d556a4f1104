//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod generation_config;
mod output_format;

pub use generation_config::GenerationConfig;
pub use output_format::OutputFormat;
