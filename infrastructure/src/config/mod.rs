//! Configuration file loading for quill
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUILL_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quill.toml` or `./.quill.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quill/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FilePanelConfig, FileProviderConfig,
    FileReplConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
