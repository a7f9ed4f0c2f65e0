//! HTTP handlers for the AgroSphere web server

pub mod analytics;
pub mod chat;
pub mod farm;
pub mod health;
pub mod predict;
pub mod sensor;

use axum::response::Html;

pub use analytics::*;
pub use chat::*;
pub use farm::*;
pub use health::*;
pub use predict::*;
pub use sensor::*;

use crate::views;

/// Static about page
pub async fn about_page() -> Html<String> {
    Html(views::about::render())
}
