//! One-shot generation domain.
//!
//! - [`mood::Mood`] - the fixed set of tones a generation can take
//! - [`request::GenerationRequest`] - prompt + mood for a single call
//! - [`output::GenerationOutput`] - what the generator panel currently shows

pub mod mood;
pub mod output;
pub mod request;
