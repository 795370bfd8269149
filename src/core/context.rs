// File: src/core/context.rs
use crate::core::types::{
    Language, Message, MessageId, Platform, Relationship, Sender, SuggestionContext,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Append-only message history for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
    /// Ids keep increasing across clears so a message id is never reused.
    next_id: MessageId,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new message and returns a reference to it.
    /// O(1) amortized complexity.
    pub fn push(
        &mut self,
        text: String,
        sender: Sender,
        language: Option<Language>,
        platform: Option<Platform>,
        original_text: Option<String>,
    ) -> &Message {
        self.next_id += 1;
        self.messages.push(Message {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
            language,
            platform,
            is_translated: original_text.is_some(),
            original_text,
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// Assembles a fresh `SuggestionContext` per request.
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    /// Most recent messages to hand over; `None` passes the full history.
    window_size: Option<usize>,
}

impl ContextBuilder {
    pub fn new(window_size: Option<usize>) -> Self {
        Self { window_size }
    }

    pub fn build(
        &self,
        incoming: &Message,
        history: &[Message],
        relationship: Relationship,
    ) -> SuggestionContext {
        let start = match self.window_size {
            Some(size) => history.len().saturating_sub(size),
            None => 0,
        };

        SuggestionContext {
            incoming_message: incoming.text.clone(),
            conversation_history: history[start..].to_vec(),
            detected_language: incoming.language.unwrap_or(Language::En),
            platform: incoming.platform.unwrap_or_default(),
            relationship,
        }
    }
}
