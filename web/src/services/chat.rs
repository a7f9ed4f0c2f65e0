//! Chat service for the Krishi AI Advisor
//!
//! Each user message gets exactly one bot message: the backend's reply, or a
//! fixed apology when the backend is unreachable. Requests are not cancelled
//! or sequenced, so two overlapping sends from one session may have their
//! replies appended in completion order.

use shared::ChatRequest;
use uuid::Uuid;

use crate::external::AgriApiClient;
use crate::services::session::SessionStore;

#[derive(Clone)]
pub struct ChatService {
    api: AgriApiClient,
    sessions: SessionStore,
}

impl ChatService {
    pub fn new(api: AgriApiClient, sessions: SessionStore) -> Self {
        Self { api, sessions }
    }

    /// Send a user message. Returns `false` when the message was blank and
    /// nothing was appended.
    pub async fn send(&self, session_id: Uuid, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.sessions
            .with_session(session_id, |s| s.chat.push_user(text));

        let request = ChatRequest {
            query: text.to_string(),
        };

        match self.api.chat(&request).await {
            Ok(reply) => {
                self.sessions
                    .with_session(session_id, |s| s.chat.push_bot(reply.reply));
            }
            Err(e) => {
                tracing::warn!(session = %session_id, "Chat error: {}", e);
                self.sessions
                    .with_session(session_id, |s| s.chat.push_apology());
            }
        }

        true
    }
}
