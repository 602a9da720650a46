//! Harvest season management service

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::HarvestInput;
use shared::validation::validate_harvest_input;

use super::require_confirmation;

/// Harvest service
#[derive(Clone)]
pub struct HarvestService {
    db: PgPool,
}

/// Harvest season record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Harvest {
    pub id: Uuid,
    pub name: String,
    pub year: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HarvestService {
    /// Create a new HarvestService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all harvest seasons
    pub async fn list_harvests(&self) -> AppResult<Vec<Harvest>> {
        let harvests = sqlx::query_as::<_, Harvest>(
            "SELECT id, name, year, created_at, updated_at FROM harvests ORDER BY year DESC, name ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(harvests)
    }

    /// Get a harvest season by id
    pub async fn get_harvest(&self, harvest_id: Uuid) -> AppResult<Harvest> {
        let harvest = sqlx::query_as::<_, Harvest>(
            "SELECT id, name, year, created_at, updated_at FROM harvests WHERE id = $1",
        )
        .bind(harvest_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Safra".to_string()))?;

        Ok(harvest)
    }

    /// Create a new harvest season
    pub async fn create_harvest(&self, input: HarvestInput) -> AppResult<Harvest> {
        validate_harvest_input(&input).map_err(AppError::validation)?;

        let harvest = sqlx::query_as::<_, Harvest>(
            r#"
            INSERT INTO harvests (name, year)
            VALUES ($1, $2)
            RETURNING id, name, year, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.year)
        .fetch_one(&self.db)
        .await?;

        Ok(harvest)
    }

    /// Replace a harvest season
    pub async fn update_harvest(&self, harvest_id: Uuid, input: HarvestInput) -> AppResult<Harvest> {
        self.get_harvest(harvest_id).await?;

        validate_harvest_input(&input).map_err(AppError::validation)?;

        let harvest = sqlx::query_as::<_, Harvest>(
            r#"
            UPDATE harvests
            SET name = $1, year = $2, updated_at = now()
            WHERE id = $3
            RETURNING id, name, year, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(input.year)
        .bind(harvest_id)
        .fetch_one(&self.db)
        .await?;

        Ok(harvest)
    }

    /// Delete a harvest season after explicit confirmation
    pub async fn delete_harvest(&self, harvest_id: Uuid, confirmed: bool) -> AppResult<()> {
        require_confirmation(confirmed)?;

        let result = sqlx::query("DELETE FROM harvests WHERE id = $1")
            .bind(harvest_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Safra".to_string()));
        }

        Ok(())
    }
}
