//! Conversation session
//!
//! A [`Session`] owns the message history for one user conversation. It is
//! created when the conversation starts, passed by `&mut` into each turn, and
//! consumed by [`Session::end`]. History only grows; nothing is ever edited or
//! removed while the session lives.

use chrono::{DateTime, Utc};
use stockchat_llm::Message;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    history: Vec<Message>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            history: Vec::new(),
        };
        info!(session = %session.id, "session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Conversation history, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.history.push(message);
    }

    pub(crate) fn extend(&mut self, messages: impl IntoIterator<Item = Message>) {
        self.history.extend(messages);
    }

    /// Close the session and drop its history
    pub fn end(self) {
        info!(
            session = %self.id,
            messages = self.history.len(),
            "session ended"
        );
    }
}
