//! AgroSphere - web server
//!
//! Serves the demo dashboard, prediction, sensor, analytics and chat pages.

use std::{net::SocketAddr, time::Duration};

use agrosphere_web::{create_app, services::session::spawn_pruner, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "agrosphere=debug,agrosphere_web=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting AgroSphere web server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Backend API: {}", config.api.base_url);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let idle_timeout = Duration::from_secs(config.session.idle_timeout_secs);

    // Create application state
    let state = AppState::new(config)?;
    spawn_pruner(state.sessions.clone(), idle_timeout);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
