//! AgroSphere web server
//!
//! Server-rendered demo frontend for simulated agriculture data: a farm
//! dashboard, farm detail pages, a crop prediction form, a live sensor view,
//! analytics and the Krishi AI chat advisor. Predictions, chat replies and
//! sensor readings come from an external backend API.

use std::{sync::Arc, time::Duration};

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod views;

pub use config::Config;

use crate::external::AgriApiClient;
use crate::services::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: AgriApiClient,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> error::AppResult<Self> {
        let api = AgriApiClient::new(
            config.api.base_url.clone(),
            Duration::from_secs(config.api.timeout_secs),
        )?;

        Ok(Self {
            config: Arc::new(config),
            api,
            sessions: SessionStore::new(),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for the JSON endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let with_session = from_fn_with_state(state.clone(), middleware::session_middleware);

    Router::new()
        .merge(routes::page_routes().route_layer(with_session.clone()))
        .nest(
            "/api",
            routes::api_routes().route_layer(with_session).layer(cors),
        )
        .route("/health", get(handlers::health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
