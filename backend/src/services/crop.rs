//! Crop management service

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::CropInput;
use shared::validation::validate_crop_input;

use super::require_confirmation;

/// Crop service
#[derive(Clone)]
pub struct CropService {
    db: PgPool,
}

/// Crop record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Crop {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CropService {
    /// Create a new CropService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all crops
    pub async fn list_crops(&self) -> AppResult<Vec<Crop>> {
        let crops = sqlx::query_as::<_, Crop>(
            "SELECT id, name, created_at, updated_at FROM crops ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(crops)
    }

    /// Get a crop by id
    pub async fn get_crop(&self, crop_id: Uuid) -> AppResult<Crop> {
        let crop = sqlx::query_as::<_, Crop>(
            "SELECT id, name, created_at, updated_at FROM crops WHERE id = $1",
        )
        .bind(crop_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Cultura".to_string()))?;

        Ok(crop)
    }

    /// Create a new crop
    pub async fn create_crop(&self, input: CropInput) -> AppResult<Crop> {
        validate_crop_input(&input).map_err(AppError::validation)?;

        let crop = sqlx::query_as::<_, Crop>(
            r#"
            INSERT INTO crops (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .fetch_one(&self.db)
        .await?;

        Ok(crop)
    }

    /// Replace a crop
    pub async fn update_crop(&self, crop_id: Uuid, input: CropInput) -> AppResult<Crop> {
        self.get_crop(crop_id).await?;

        validate_crop_input(&input).map_err(AppError::validation)?;

        let crop = sqlx::query_as::<_, Crop>(
            r#"
            UPDATE crops
            SET name = $1, updated_at = now()
            WHERE id = $2
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(crop_id)
        .fetch_one(&self.db)
        .await?;

        Ok(crop)
    }

    /// Delete a crop after explicit confirmation
    pub async fn delete_crop(&self, crop_id: Uuid, confirmed: bool) -> AppResult<()> {
        require_confirmation(confirmed)?;

        let result = sqlx::query("DELETE FROM crops WHERE id = $1")
            .bind(crop_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cultura".to_string()));
        }

        Ok(())
    }
}
