use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::widget::agents::Agent;

pub const GREETING_ID: &str = "initial";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Agent,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub author: Author,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            author: Author::User,
            sent_at: Utc::now(),
        }
    }

    pub fn greeting(agent: &Agent) -> Self {
        Self {
            id: GREETING_ID.to_string(),
            content: agent.greeting.to_string(),
            author: Author::Agent,
            sent_at: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

/// Ordered, append-only message list for the current agent.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drops everything and starts over from a single message.
    pub fn reseed(&mut self, first: ChatMessage) {
        self.messages.clear();
        self.messages.push(first);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::agents::AgentKind;

    #[test]
    fn test_user_messages_get_unique_ids() {
        let a = ChatMessage::user("one");
        let b = ChatMessage::user("two");
        assert_ne!(a.id, b.id);
        assert!(a.is_user());
    }

    #[test]
    fn test_reseed_replaces_history() {
        let agent = AgentKind::AdmissionsSpecialist.profile();
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::user("hi"));
        transcript.push(ChatMessage::user("anyone?"));

        transcript.reseed(ChatMessage::greeting(agent));
        assert_eq!(transcript.messages().len(), 1);
        let first = &transcript.messages()[0];
        assert_eq!(first.id, GREETING_ID);
        assert_eq!(first.author, Author::Agent);
        assert_eq!(first.content, agent.greeting);
    }
}
