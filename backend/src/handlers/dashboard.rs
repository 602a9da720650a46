//! Dashboard HTTP handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::services::DashboardService;
use crate::AppState;
use shared::types::ApiResponse;

/// Get aggregated dashboard statistics
pub async fn get_dashboard_stats(State(state): State<AppState>) -> impl IntoResponse {
    let service = DashboardService::new(state.db.clone());

    match service.get_dashboard_stats().await {
        Ok(stats) => (StatusCode::OK, Json(ApiResponse::new(stats))).into_response(),
        Err(e) => e.into_response(),
    }
}
