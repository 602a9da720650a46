//! Harvest season HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::HarvestService;
use crate::AppState;
use shared::models::HarvestInput;
use shared::types::ApiResponse;

use super::DeleteParams;

/// List all harvest seasons
pub async fn list_harvests(State(state): State<AppState>) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.list_harvests().await {
        Ok(harvests) => (StatusCode::OK, Json(ApiResponse::list(harvests))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific harvest season
pub async fn get_harvest(
    State(state): State<AppState>,
    Path(harvest_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.get_harvest(harvest_id).await {
        Ok(harvest) => (StatusCode::OK, Json(ApiResponse::new(harvest))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new harvest season
pub async fn create_harvest(
    State(state): State<AppState>,
    Json(input): Json<HarvestInput>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.create_harvest(input).await {
        Ok(harvest) => (StatusCode::CREATED, Json(ApiResponse::new(harvest))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a harvest season
pub async fn update_harvest(
    State(state): State<AppState>,
    Path(harvest_id): Path<Uuid>,
    Json(input): Json<HarvestInput>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.update_harvest(harvest_id, input).await {
        Ok(harvest) => (StatusCode::OK, Json(ApiResponse::new(harvest))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a harvest season
pub async fn delete_harvest(
    State(state): State<AppState>,
    Path(harvest_id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    let service = HarvestService::new(state.db.clone());

    match service.delete_harvest(harvest_id, params.confirmed()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::Value::Null)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
