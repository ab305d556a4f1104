//! Mood value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Tone requested for a one-shot generation (Value Object)
///
/// Each mood maps to its own instruction that is prepended to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Sad,
    Mysterious,
    Adventurous,
    Romantic,
    Funny,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Mysterious,
        Mood::Adventurous,
        Mood::Romantic,
        Mood::Funny,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Mysterious => "mysterious",
            Mood::Adventurous => "adventurous",
            Mood::Romantic => "romantic",
            Mood::Funny => "funny",
        }
    }

    /// Instruction sent ahead of the user's prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            Mood::Happy => "Write in a cheerful, uplifting and warm tone.",
            Mood::Sad => "Write in a melancholic, wistful and bittersweet tone.",
            Mood::Mysterious => {
                "Write in a mysterious, suspenseful tone full of hints and unanswered questions."
            }
            Mood::Adventurous => "Write in a bold, energetic tone full of action and discovery.",
            Mood::Romantic => "Write in a tender, romantic and heartfelt tone.",
            Mood::Funny => "Write in a playful, witty and humorous tone.",
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mood {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == needle)
            .ok_or_else(|| DomainError::UnknownMood(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parse_roundtrip() {
        for mood in Mood::ALL {
            assert_eq!(mood.to_string().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Mysterious".parse::<Mood>().unwrap(), Mood::Mysterious);
        assert_eq!(" FUNNY ".parse::<Mood>().unwrap(), Mood::Funny);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "grumpy".parse::<Mood>(),
            Err(DomainError::UnknownMood("grumpy".to_string()))
        );
    }

    #[test]
    fn test_instructions_are_distinct() {
        let instructions: HashSet<_> = Mood::ALL.iter().map(|m| m.instruction()).collect();
        assert_eq!(instructions.len(), Mood::ALL.len());
    }
}
