//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show a spinner until the first fragment arrives
    pub show_progress: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}
