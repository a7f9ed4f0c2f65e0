//! HTTP handlers for the live sensor view

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use shared::SensorReading;

use crate::middleware::CurrentSession;
use crate::services::{FeedSource, SensorService};
use crate::views;
use crate::AppState;

/// Query parameters of the sensor page
#[derive(Debug, Default, Deserialize)]
pub struct SensorPageQuery {
    /// Set by the page's own refresh; absent when the user navigates here
    pub poll: Option<u8>,
}

/// Sensor page: a fresh visit resets the window, every visit polls once
pub async fn sensor_page(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
    Query(query): Query<SensorPageQuery>,
) -> Html<String> {
    let service = SensorService::new(state.api.clone(), state.sessions.clone());
    if query.poll.is_none() {
        service.reset(session_id);
    }

    let (source, readings) = service.tick(session_id).await;
    Html(views::sensor::render(
        &readings,
        source,
        state.config.sensor.poll_interval_secs,
    ))
}

#[derive(Serialize)]
pub struct SensorFeedResponse {
    pub simulated: bool,
    pub data: Vec<SensorReading>,
}

/// Poll once and return the session's window as JSON
pub async fn sensor_feed(
    State(state): State<AppState>,
    CurrentSession(session_id): CurrentSession,
) -> Json<SensorFeedResponse> {
    let service = SensorService::new(state.api.clone(), state.sessions.clone());
    let (source, data) = service.tick(session_id).await;
    Json(SensorFeedResponse {
        simulated: source == FeedSource::Simulated,
        data,
    })
}
