//! Prompt value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A piece of user input that is safe to send (Value Object)
///
/// Blank input never reaches the text-generation service: construction
/// fails for empty or whitespace-only content. The original text is kept
/// verbatim, surrounding whitespace included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Try to create a new prompt, rejecting blank content
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            Err(DomainError::EmptyPrompt)
        } else {
            Ok(Self { content })
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Prompt {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Prompt::try_new(s)
    }
}

impl TryFrom<&str> for Prompt {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Prompt::try_new(s)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.content
    }
}
