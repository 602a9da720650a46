//! Farm/crop/harvest association HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::PlantingService;
use crate::AppState;
use shared::models::PlantingInput;
use shared::types::ApiResponse;

use super::DeleteParams;

/// List all associations
pub async fn list_plantings(State(state): State<AppState>) -> impl IntoResponse {
    let service = PlantingService::new(state.db.clone());

    match service.list_plantings().await {
        Ok(plantings) => (StatusCode::OK, Json(ApiResponse::list(plantings))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific association
pub async fn get_planting(
    State(state): State<AppState>,
    Path(planting_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = PlantingService::new(state.db.clone());

    match service.get_planting(planting_id).await {
        Ok(planting) => (StatusCode::OK, Json(ApiResponse::new(planting))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Link a farm to a crop for a harvest season
pub async fn create_planting(
    State(state): State<AppState>,
    Json(input): Json<PlantingInput>,
) -> impl IntoResponse {
    let service = PlantingService::new(state.db.clone());

    match service.create_planting(input).await {
        Ok(planting) => (StatusCode::CREATED, Json(ApiResponse::new(planting))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete an association
pub async fn delete_planting(
    State(state): State<AppState>,
    Path(planting_id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    let service = PlantingService::new(state.db.clone());

    match service.delete_planting(planting_id, params.confirmed()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::Value::Null)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
