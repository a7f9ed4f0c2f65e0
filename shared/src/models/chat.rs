//! Chat transcript models for the Krishi AI Advisor

use serde::{Deserialize, Serialize};

/// Opening message of every transcript (markdown)
pub const CHAT_GREETING: &str = "👋 Namaste! I'm **Krishi AI Advisor** 🤖 — your smart agri guide.\nAsk me anything about crops, irrigation, or soil health 🌱";

/// Bot message appended when the chat endpoint cannot be reached
pub const CHAT_APOLOGY: &str = "⚠️ Couldn't reach the server. Please retry.";

/// Author of a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }
}

/// Request body of `POST /api/v1/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
}

/// Response body of `POST /api/v1/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Ordered, append-only list of chat messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    /// Create a transcript holding only the greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(CHAT_GREETING)],
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::bot(text));
    }

    pub fn push_apology(&mut self) {
        self.push_bot(CHAT_APOLOGY);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_starts_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.messages()[0].sender, Sender::Bot);
        assert_eq!(transcript.messages()[0].text, CHAT_GREETING);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut transcript = ChatTranscript::new();
        transcript.push_user("when to irrigate?");
        transcript.push_bot("early morning");
        transcript.push_user("and fertiliser?");
        transcript.push_apology();

        let texts: Vec<&str> = transcript.messages()[1..]
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec!["when to irrigate?", "early morning", "and fertiliser?", CHAT_APOLOGY]
        );
    }

    #[test]
    fn test_sender_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::user("hi")).unwrap();
        assert_eq!(json, r#"{"sender":"user","text":"hi"}"#);
    }
}
