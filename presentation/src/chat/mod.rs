//! Interactive chat module
//!
//! Provides a line-editor based chat interface with an embedded generator.

mod command;
mod repl;

pub use command::{ReplCommand, ReplInput};
pub use repl::ChatRepl;
