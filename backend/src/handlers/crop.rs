//! Crop HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::CropService;
use crate::AppState;
use shared::models::CropInput;
use shared::types::ApiResponse;

use super::DeleteParams;

/// List all crops
pub async fn list_crops(State(state): State<AppState>) -> impl IntoResponse {
    let service = CropService::new(state.db.clone());

    match service.list_crops().await {
        Ok(crops) => (StatusCode::OK, Json(ApiResponse::list(crops))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific crop
pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = CropService::new(state.db.clone());

    match service.get_crop(crop_id).await {
        Ok(crop) => (StatusCode::OK, Json(ApiResponse::new(crop))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new crop
pub async fn create_crop(
    State(state): State<AppState>,
    Json(input): Json<CropInput>,
) -> impl IntoResponse {
    let service = CropService::new(state.db.clone());

    match service.create_crop(input).await {
        Ok(crop) => (StatusCode::CREATED, Json(ApiResponse::new(crop))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a crop
pub async fn update_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<Uuid>,
    Json(input): Json<CropInput>,
) -> impl IntoResponse {
    let service = CropService::new(state.db.clone());

    match service.update_crop(crop_id, input).await {
        Ok(crop) => (StatusCode::OK, Json(ApiResponse::new(crop))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a crop
pub async fn delete_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    let service = CropService::new(state.db.clone());

    match service.delete_crop(crop_id, params.confirmed()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::Value::Null)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
