//! HTTP handlers for the Krishi AI Advisor chat

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::middleware::CurrentSession;
use crate::services::ChatService;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

/// Show the session's transcript
pub async fn chat_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> Html<String> {
    let transcript = state.sessions.with_session(session_id, |s| s.chat.clone());
    Html(views::chat::render(transcript.messages()))
}

/// Send a message, then show the transcript again
pub async fn send_message(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Form(form): Form<ChatForm>,
) -> Redirect {
    let service = ChatService::new(state.api.clone(), state.sessions.clone());
    service.send(session_id, &form.message).await;
    Redirect::to("/chat")
}
