//! Presentation layer for quill
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand, ReplInput};
pub use cli::commands::{Cli, MoodArg, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, StreamPrinter};
