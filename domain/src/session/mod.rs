//! Chat session domain.
//!
//! - [`entities::Message`] - a single message in the transcript
//! - [`transcript::Transcript`] - ordered messages with at most one in-progress reply
//! - [`context::ConversationContext`] - finalized turns replayed to the model
//! - [`stream::StreamEvent`] - events of a streaming model response

pub mod context;
pub mod entities;
pub mod stream;
pub mod transcript;
