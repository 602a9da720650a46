//! Dashboard statistics service

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use shared::models::{DashboardStats, FarmSummary};
use shared::stats::aggregate_dashboard;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    db: PgPool,
}

#[derive(sqlx::FromRow)]
struct FarmRow {
    id: Uuid,
    state: String,
    total_area: Decimal,
    arable_area: Decimal,
    vegetation_area: Decimal,
}

#[derive(sqlx::FromRow)]
struct PlantingCropRow {
    farm_id: Uuid,
    crop_name: String,
}

impl DashboardService {
    /// Create a new DashboardService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Compute the dashboard statistics from the full farm graph.
    ///
    /// Recomputed on every call. The fetch preserves insertion order so the
    /// chart groupings keep first-occurrence ordering.
    pub async fn get_dashboard_stats(&self) -> AppResult<DashboardStats> {
        let farms = sqlx::query_as::<_, FarmRow>(
            r#"
            SELECT id, state, total_area, arable_area, vegetation_area
            FROM farms
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let plantings = sqlx::query_as::<_, PlantingCropRow>(
            r#"
            SELECT p.farm_id, c.name AS crop_name
            FROM plantings p
            JOIN crops c ON c.id = p.crop_id
            ORDER BY p.created_at ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let summaries: Vec<FarmSummary> = farms
            .into_iter()
            .map(|farm| {
                let crops = plantings
                    .iter()
                    .filter(|p| p.farm_id == farm.id)
                    .map(|p| p.crop_name.clone())
                    .collect();
                FarmSummary {
                    state: farm.state,
                    total_area: farm.total_area,
                    arable_area: farm.arable_area,
                    vegetation_area: farm.vegetation_area,
                    crops,
                }
            })
            .collect();

        Ok(aggregate_dashboard(&summaries))
    }
}
