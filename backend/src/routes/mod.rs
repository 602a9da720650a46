//! Route definitions for the Farm Registry API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Producer management
        .nest("/producers", producer_routes())
        // Farm management
        .nest("/farms", farm_routes())
        // Crop management
        .nest("/crops", crop_routes())
        // Harvest season management
        .nest("/harvests", harvest_routes())
        // Farm/crop/harvest associations
        .nest("/plantings", planting_routes())
        // Aggregated statistics
        .route("/dashboard", get(handlers::get_dashboard_stats))
}

/// Producer management routes
fn producer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_producers).post(handlers::create_producer),
        )
        .route(
            "/:producer_id",
            get(handlers::get_producer)
                .put(handlers::update_producer)
                .delete(handlers::delete_producer),
        )
}

/// Farm management routes
fn farm_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_farms).post(handlers::create_farm))
        .route(
            "/:farm_id",
            get(handlers::get_farm)
                .put(handlers::update_farm)
                .delete(handlers::delete_farm),
        )
}

/// Crop management routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_crops).post(handlers::create_crop))
        .route(
            "/:crop_id",
            get(handlers::get_crop)
                .put(handlers::update_crop)
                .delete(handlers::delete_crop),
        )
}

/// Harvest season management routes
fn harvest_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_harvests).post(handlers::create_harvest),
        )
        .route(
            "/:harvest_id",
            get(handlers::get_harvest)
                .put(handlers::update_harvest)
                .delete(handlers::delete_harvest),
        )
}

/// Association routes
fn planting_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_plantings).post(handlers::create_planting),
        )
        .route(
            "/:planting_id",
            get(handlers::get_planting).delete(handlers::delete_planting),
        )
}
