//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use quill_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format for one-shot generation
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Show a spinner until the first fragment arrives
    pub show_progress: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}
