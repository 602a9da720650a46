//! Producer HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::services::ProducerService;
use crate::AppState;
use shared::models::ProducerInput;
use shared::types::ApiResponse;

use super::DeleteParams;

/// List all producers
pub async fn list_producers(State(state): State<AppState>) -> impl IntoResponse {
    let service = ProducerService::new(state.db.clone());

    match service.list_producers().await {
        Ok(producers) => (StatusCode::OK, Json(ApiResponse::list(producers))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get a specific producer
pub async fn get_producer(
    State(state): State<AppState>,
    Path(producer_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = ProducerService::new(state.db.clone());

    match service.get_producer(producer_id).await {
        Ok(producer) => (StatusCode::OK, Json(ApiResponse::new(producer))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new producer
pub async fn create_producer(
    State(state): State<AppState>,
    Json(input): Json<ProducerInput>,
) -> impl IntoResponse {
    let service = ProducerService::new(state.db.clone());

    match service.create_producer(input).await {
        Ok(producer) => (StatusCode::CREATED, Json(ApiResponse::new(producer))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Replace a producer
pub async fn update_producer(
    State(state): State<AppState>,
    Path(producer_id): Path<Uuid>,
    Json(input): Json<ProducerInput>,
) -> impl IntoResponse {
    let service = ProducerService::new(state.db.clone());

    match service.update_producer(producer_id, input).await {
        Ok(producer) => (StatusCode::OK, Json(ApiResponse::new(producer))).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete a producer
pub async fn delete_producer(
    State(state): State<AppState>,
    Path(producer_id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> impl IntoResponse {
    let service = ProducerService::new(state.db.clone());

    match service.delete_producer(producer_id, params.confirmed()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::new(serde_json::Value::Null)),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
