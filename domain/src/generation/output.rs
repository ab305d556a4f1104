//! Generator panel output state

use serde::Serialize;

/// What the generator panel currently displays.
///
/// Each finished request replaces the previous value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum GenerationOutput {
    /// Nothing requested yet
    #[default]
    Idle,
    /// The model's complete result
    Text(String),
    /// The call succeeded but produced no content
    Empty,
    /// The call failed; holds the error description
    Error(String),
}

impl GenerationOutput {
    /// Map a successful result, treating blank text as [`GenerationOutput::Empty`].
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.trim().is_empty() {
            GenerationOutput::Empty
        } else {
            GenerationOutput::Text(text)
        }
    }
}
