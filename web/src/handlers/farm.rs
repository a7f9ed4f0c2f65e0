//! HTTP handlers for the dashboard and farm pages

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{farm_summaries, find_farm_by_key, Farm, FarmDetails};

use crate::error::{AppError, AppResult};
use crate::services::PredictionService;
use crate::views;
use crate::AppState;

/// Dashboard page listing the demo farms
pub async fn dashboard() -> Html<String> {
    Html(views::dashboard::render(&farm_summaries()))
}

/// Farm detail page
pub async fn farm_page(Path(key): Path<String>) -> Response {
    match find_farm_by_key(&key) {
        Some(farm) => Html(views::farm::render(&farm, None)).into_response(),
        None => not_found(),
    }
}

/// Re-analyze a farm's readings with the prediction backend
pub async fn analyze_farm(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    let Some(farm) = find_farm_by_key(&key) else {
        return not_found();
    };

    let service = PredictionService::new(state.api.clone());
    let result = service.analyze_farm(&farm).await;
    Html(views::farm::render(&farm, Some(&result))).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(views::farm::not_found())).into_response()
}

#[derive(Serialize)]
pub struct FarmListResponse {
    pub count: usize,
    pub farms: Vec<Farm>,
}

/// List farms as JSON
pub async fn list_farms() -> Json<FarmListResponse> {
    let farms = farm_summaries();
    Json(FarmListResponse {
        count: farms.len(),
        farms,
    })
}

/// Get one farm as JSON
pub async fn get_farm(Path(key): Path<String>) -> AppResult<Json<FarmDetails>> {
    find_farm_by_key(&key)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Farm {}", key)))
}
