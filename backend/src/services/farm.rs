//! Farm management service

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::FarmInput;
use shared::validation::validate_farm_input;

use super::require_confirmation;

/// Farm service for managing land holdings
#[derive(Clone)]
pub struct FarmService {
    db: PgPool,
}

/// Farm record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Farm {
    pub id: Uuid,
    pub producer_id: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub total_area: Decimal,
    pub arable_area: Decimal,
    pub vegetation_area: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const FARM_COLUMNS: &str = "id, producer_id, name, city, state, total_area, arable_area, \
                            vegetation_area, created_at, updated_at";

impl FarmService {
    /// Create a new FarmService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all farms
    pub async fn list_farms(&self) -> AppResult<Vec<Farm>> {
        let farms = sqlx::query_as::<_, Farm>(&format!(
            "SELECT {} FROM farms ORDER BY name ASC",
            FARM_COLUMNS
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(farms)
    }

    /// Get a farm by id
    pub async fn get_farm(&self, farm_id: Uuid) -> AppResult<Farm> {
        let farm = sqlx::query_as::<_, Farm>(&format!(
            "SELECT {} FROM farms WHERE id = $1",
            FARM_COLUMNS
        ))
        .bind(farm_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Fazenda".to_string()))?;

        Ok(farm)
    }

    /// Create a new farm
    pub async fn create_farm(&self, input: FarmInput) -> AppResult<Farm> {
        validate_farm_input(&input).map_err(AppError::validation)?;

        self.check_producer_exists(input.producer_id).await?;

        let farm = sqlx::query_as::<_, Farm>(&format!(
            r#"
            INSERT INTO farms (producer_id, name, city, state, total_area, arable_area, vegetation_area)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            FARM_COLUMNS
        ))
        .bind(input.producer_id)
        .bind(input.name.trim())
        .bind(input.city.trim())
        .bind(&input.state)
        .bind(input.total_area)
        .bind(input.arable_area)
        .bind(input.vegetation_area)
        .fetch_one(&self.db)
        .await?;

        Ok(farm)
    }

    /// Replace a farm
    ///
    /// The areas are validated from the submitted payload alone; persisted
    /// values play no part in the allocation check.
    pub async fn update_farm(&self, farm_id: Uuid, input: FarmInput) -> AppResult<Farm> {
        // Check if farm exists
        self.get_farm(farm_id).await?;

        validate_farm_input(&input).map_err(AppError::validation)?;

        self.check_producer_exists(input.producer_id).await?;

        let farm = sqlx::query_as::<_, Farm>(&format!(
            r#"
            UPDATE farms
            SET producer_id = $1, name = $2, city = $3, state = $4,
                total_area = $5, arable_area = $6, vegetation_area = $7, updated_at = now()
            WHERE id = $8
            RETURNING {}
            "#,
            FARM_COLUMNS
        ))
        .bind(input.producer_id)
        .bind(input.name.trim())
        .bind(input.city.trim())
        .bind(&input.state)
        .bind(input.total_area)
        .bind(input.arable_area)
        .bind(input.vegetation_area)
        .bind(farm_id)
        .fetch_one(&self.db)
        .await?;

        Ok(farm)
    }

    /// Delete a farm after explicit confirmation
    pub async fn delete_farm(&self, farm_id: Uuid, confirmed: bool) -> AppResult<()> {
        require_confirmation(confirmed)?;

        let result = sqlx::query("DELETE FROM farms WHERE id = $1")
            .bind(farm_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Fazenda".to_string()));
        }

        Ok(())
    }

    async fn check_producer_exists(&self, producer_id: Uuid) -> AppResult<()> {
        let exists =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM producers WHERE id = $1")
                .bind(producer_id)
                .fetch_one(&self.db)
                .await?;

        if exists == 0 {
            return Err(AppError::NotFound("Produtor".to_string()));
        }

        Ok(())
    }
}
