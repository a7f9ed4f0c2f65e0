//! HTTP handlers for the manual prediction form

use axum::{
    extract::State,
    response::Html,
    Form,
};
use shared::PredictionInput;

use crate::middleware::CurrentSession;
use crate::services::PredictionService;
use crate::views;
use crate::AppState;

/// Empty predict form
pub async fn predict_form() -> Html<String> {
    Html(views::predict::render(&PredictionInput::default(), None))
}

/// Submit the predict form. Failures render as a message on the page.
pub async fn submit_prediction(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Form(input): Form<PredictionInput>,
) -> Html<String> {
    let service = PredictionService::new(state.api.clone());
    let outcome = service.predict(&input).await;

    if let Some(text) = outcome.prediction_text() {
        let text = text.to_string();
        state
            .sessions
            .with_session(session_id, |s| s.last_prediction = Some(text));
    }

    Html(views::predict::render(&input, Some(&outcome)))
}
