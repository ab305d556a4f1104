//! Generation request value object

use super::mood::Mood;
use crate::core::prompt::Prompt;

/// A single prompt + mood pair for the one-shot generator.
///
/// Lives only for the duration of one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: Prompt,
    pub mood: Mood,
}

impl GenerationRequest {
    pub fn new(prompt: Prompt, mood: Mood) -> Self {
        Self { prompt, mood }
    }

    /// Text sent to the model: the mood instruction, a blank line, then the prompt.
    pub fn to_request_text(&self) -> String {
        format!("{}\n\n{}", self.mood.instruction(), self.prompt.content())
    }
}
