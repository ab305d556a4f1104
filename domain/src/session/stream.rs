//! Streaming events for LLM session communication.
//!
//! [`StreamEvent`] represents individual events in a streaming LLM response,
//! enabling real-time display of model output as it's generated.

/// An event in a streaming LLM response.
///
/// Used to bridge infrastructure-level streaming (SSE chunks from the HTTP
/// API) to the application layer. A well-formed stream is zero or more
/// `Delta`s followed by exactly one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment from the model.
    Delta(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming.
    Error(String),
}
