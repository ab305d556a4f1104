//! Transcript entity
//!
//! The ordered list of messages shown in the chat panel. All messages are
//! finalized except, possibly, a trailing model reply that is still receiving
//! fragments.

use super::entities::{Message, Sender};
use serde::Serialize;

/// Ordered conversation messages with at most one in-progress model reply.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<Message>,
    /// The last message is a model reply still receiving fragments.
    #[serde(skip)]
    streaming: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Append a finalized user message.
    ///
    /// Any reply still in progress is finalized first so the invariant holds.
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.streaming = false;
        self.messages.push(Message::user(text));
    }

    /// Append a finalized model message (used for error reports).
    pub fn push_model(&mut self, text: impl Into<String>) {
        self.streaming = false;
        self.messages.push(Message::model(text));
    }

    /// Merge one streamed fragment into the transcript.
    ///
    /// Extends the in-progress model reply, or starts a new one holding
    /// `fragment` when there is none. Fragments are concatenated verbatim.
    pub fn append_fragment(&mut self, fragment: &str) {
        if self.streaming
            && let Some(last) = self.messages.last_mut()
            && last.sender == Sender::Model
        {
            last.text.push_str(fragment);
            return;
        }
        self.messages.push(Message::model(fragment));
        self.streaming = true;
    }

    /// Finalize the in-progress reply, returning it if there was one.
    pub fn finalize(&mut self) -> Option<&Message> {
        if std::mem::take(&mut self.streaming) {
            self.messages.last()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fragment_starts_model_message() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.append_fragment("Hel");

        assert!(transcript.is_streaming());
        assert_eq!(
            transcript.messages(),
            &[Message::user("hi"), Message::model("Hel")]
        );
    }

    #[test]
    fn test_fragments_concatenate_in_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        for fragment in ["a", "b", "", "c d", "\n", "e"] {
            transcript.append_fragment(fragment);
        }

        assert_eq!(transcript.messages().len(), 2);
        assert_eq!(transcript.messages()[1].text, "abc d\ne");
    }

    #[test]
    fn test_finalize_closes_reply() {
        let mut transcript = Transcript::new();
        transcript.push_user("hi");
        transcript.append_fragment("done");

        assert_eq!(transcript.finalize(), Some(&Message::model("done")));
        assert!(!transcript.is_streaming());
        assert!(transcript.finalize().is_none());
    }

    #[test]
    fn test_fragment_after_finalize_starts_new_reply() {
        let mut transcript = Transcript::new();
        transcript.push_user("q1");
        transcript.append_fragment("a1");
        transcript.finalize();
        transcript.push_user("q2");
        transcript.append_fragment("a2");

        let texts: Vec<_> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["q1", "a1", "q2", "a2"]);
    }

    #[test]
    fn test_fragment_after_finalized_model_message_does_not_merge() {
        let mut transcript = Transcript::new();
        transcript.push_model("Error: boom");
        transcript.append_fragment("new");

        assert_eq!(transcript.messages().len(), 2);
        assert_eq!(transcript.messages()[0].text, "Error: boom");
        assert_eq!(transcript.messages()[1].text, "new");
    }

    #[test]
    fn test_push_user_finalizes_pending_reply() {
        let mut transcript = Transcript::new();
        transcript.append_fragment("partial");
        transcript.push_user("next");

        assert!(!transcript.is_streaming());
        assert_eq!(transcript.messages().len(), 2);
    }
}
