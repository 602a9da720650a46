//! Farm HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::FarmService;
use crate::AppState;
use shared::models::FarmInput;
use shared::types::ApiResponse;

use super::DeleteParams;

/// List all farms
pub async fn list_farms(State(state): State<AppState>) -> impl IntoResponse {
    let service = FarmService::new(state.db.clone());

    match service.list_farms().await {
        Ok(farms) => (StatusCode::OK, Json(ApiResponse::list(farms))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific farm
pub async fn get_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = FarmService::new(state.db.clone());

    match service.get_farm(farm_id).await {
        Ok(farm) => (StatusCode::OK, Json(ApiResponse::new(farm))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new farm
pub async fn create_farm(
    State(state): State<AppState>,
    Json(input): Json<FarmInput>,
) -> impl IntoResponse {
    let service = FarmService::new(state.db.clone());

    match service.create_farm(input).await {
        Ok(farm) => (StatusCode::CREATED, Json(ApiResponse::new(farm))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a farm
pub async fn update_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
    Json(input): Json<FarmInput>,
) -> impl IntoResponse {
    let service = FarmService::new(state.db.clone());

    match service.update_farm(farm_id, input).await {
        Ok(farm) => (StatusCode::OK, Json(ApiResponse::new(farm))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a farm
pub async fn delete_farm(
    State(state): State<AppState>,
    Path(farm_id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    let service = FarmService::new(state.db.clone());

    match service.delete_farm(farm_id, params.confirmed()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::Value::Null)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
