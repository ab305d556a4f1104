//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available Gemini models (Value Object)
///
/// Known identifiers get their own variant; anything else is carried
/// verbatim in [`Model::Custom`] so new service models work without a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini25Pro,
    Gemini25Flash,
    Gemini25FlashLite,
    Gemini20Flash,
    Gemini15Flash,
    Gemini15Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25FlashLite => "gemini-2.5-flash-lite",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini15Flash => "gemini-1.5-flash",
            Model::Gemini15Pro => "gemini-1.5-pro",
            Model::Custom(s) => s,
        }
    }

    /// All models with a dedicated variant
    pub fn known_models() -> Vec<Model> {
        vec![
            Model::Gemini25Pro,
            Model::Gemini25Flash,
            Model::Gemini25FlashLite,
            Model::Gemini20Flash,
            Model::Gemini15Flash,
            Model::Gemini15Pro,
        ]
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 1.5 Flash)
    fn default() -> Self {
        Model::Gemini15Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-flash-lite" => Model::Gemini25FlashLite,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-1.5-flash" => Model::Gemini15Flash,
            "gemini-1.5-pro" => Model::Gemini15Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        // FromStr is infallible
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
