//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for one-shot generation results
///
/// Controls how a finished [`GenerationOutput`](crate::GenerationOutput)
/// is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal text with markdown styling (default)
    #[default]
    Text,
    /// Markdown rendered to an HTML fragment
    Html,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Html).unwrap();
        assert_eq!(json, "\"html\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
