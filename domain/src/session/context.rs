//! Conversation context value object

use super::entities::Message;
use serde::Serialize;

/// Finalized prior turns sent back to the model for continuity.
///
/// Grows only by whole exchanges: a user message followed by the model's
/// complete reply. Failed exchanges never enter the context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationContext {
    turns: Vec<Message>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one successful exchange.
    pub fn push_exchange(&mut self, user: Message, reply: Message) {
        self.turns.push(user);
        self.turns.push(reply);
    }

    pub fn turns(&self) -> &[Message] {
        &self.turns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_exchange_appends_in_order() {
        let mut context = ConversationContext::new();
        assert!(context.turns().is_empty());

        context.push_exchange(Message::user("q1"), Message::model("a1"));
        context.push_exchange(Message::user("q2"), Message::model("a2"));

        let texts: Vec<_> = context.turns().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["q1", "a1", "q2", "a2"]);
    }
}
