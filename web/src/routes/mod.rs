//! Route definitions for the AgroSphere web server

use axum::{routing::get, routing::post, Router};

use crate::{handlers, AppState};

/// HTML pages
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard))
        .route("/farm/:id", get(handlers::farm_page))
        .route("/farm/:id/analyze", post(handlers::analyze_farm))
        .route(
            "/predict",
            get(handlers::predict_form).post(handlers::submit_prediction),
        )
        .route("/sensor", get(handlers::sensor_page))
        .route("/analytics", get(handlers::analytics_page))
        .route("/chat", get(handlers::chat_page).post(handlers::send_message))
        .route("/about", get(handlers::about_page))
}

/// JSON endpoints
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/farms", get(handlers::list_farms))
        .route("/farms/:id", get(handlers::get_farm))
        .route("/sensors", get(handlers::sensor_feed))
        .route("/analytics", get(handlers::analytics_data))
}
