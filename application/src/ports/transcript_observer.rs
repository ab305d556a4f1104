//! Transcript observer port
//!
//! Defines the interface for watching a chat exchange as it happens.

use crate::ports::llm_gateway::GatewayError;
use quill_domain::Message;

/// Callbacks fired while a chat submission runs.
///
/// Implementations live in the presentation layer and display the reply
/// as it streams in. The transcript itself stays the source of truth; the
/// observer only mirrors it.
pub trait TranscriptObserver: Send + Sync {
    /// Called once the submission is accepted, before the request is issued
    fn on_submitted(&self, _text: &str) {}

    /// Called for each fragment, in arrival order
    fn on_fragment(&self, fragment: &str);

    /// Called when the reply finished successfully
    fn on_complete(&self, _reply: &Message) {}

    /// Called when the exchange failed
    ///
    /// `partial` is true when some reply text had already arrived and was kept.
    fn on_error(&self, _error: &GatewayError, _partial: bool) {}
}

/// No-op observer for when live display is not needed
pub struct NoObserver;

impl TranscriptObserver for NoObserver {
    fn on_fragment(&self, _fragment: &str) {}
}
