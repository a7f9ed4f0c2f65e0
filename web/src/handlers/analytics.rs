//! HTTP handlers for the analytics page

use axum::{extract::State, response::Html, Json};

use crate::middleware::CurrentSession;
use crate::services::analytics::{AnalyticsService, AnalyticsView};
use crate::views;
use crate::AppState;

pub async fn analytics_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> Html<String> {
    let view = AnalyticsService::new(state.sessions.clone()).snapshot(session_id);
    Html(views::analytics::render(&view))
}

pub async fn analytics_data(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> Json<AnalyticsView> {
    Json(AnalyticsService::new(state.sessions.clone()).snapshot(session_id))
}
