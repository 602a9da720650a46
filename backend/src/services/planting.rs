//! Farm/crop/harvest association service

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::PlantingInput;
use shared::validation::validate_planting_input;

use super::require_confirmation;

/// Planting service for farm/crop/harvest associations
#[derive(Clone)]
pub struct PlantingService {
    db: PgPool,
}

/// Association record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Planting {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub crop_id: Uuid,
    pub harvest_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Association with its display names
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlantingDetail {
    pub id: Uuid,
    pub farm_id: Uuid,
    pub farm_name: String,
    pub crop_id: Uuid,
    pub crop_name: String,
    pub harvest_id: Uuid,
    pub harvest_name: String,
    pub created_at: DateTime<Utc>,
}

impl PlantingService {
    /// Create a new PlantingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all associations with farm, crop, and harvest names
    pub async fn list_plantings(&self) -> AppResult<Vec<PlantingDetail>> {
        let plantings = sqlx::query_as::<_, PlantingDetail>(
            r#"
            SELECT p.id, p.farm_id, f.name AS farm_name,
                   p.crop_id, c.name AS crop_name,
                   p.harvest_id, h.name AS harvest_name,
                   p.created_at
            FROM plantings p
            JOIN farms f ON f.id = p.farm_id
            JOIN crops c ON c.id = p.crop_id
            JOIN harvests h ON h.id = p.harvest_id
            ORDER BY p.created_at ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(plantings)
    }

    /// Get an association by id
    pub async fn get_planting(&self, planting_id: Uuid) -> AppResult<PlantingDetail> {
        let planting = sqlx::query_as::<_, PlantingDetail>(
            r#"
            SELECT p.id, p.farm_id, f.name AS farm_name,
                   p.crop_id, c.name AS crop_name,
                   p.harvest_id, h.name AS harvest_name,
                   p.created_at
            FROM plantings p
            JOIN farms f ON f.id = p.farm_id
            JOIN crops c ON c.id = p.crop_id
            JOIN harvests h ON h.id = p.harvest_id
            WHERE p.id = $1
            "#,
        )
        .bind(planting_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Associação".to_string()))?;

        Ok(planting)
    }

    /// Link a farm to a crop for a harvest season
    pub async fn create_planting(&self, input: PlantingInput) -> AppResult<Planting> {
        validate_planting_input(&input).map_err(AppError::validation)?;

        self.check_exists("farms", input.farm_id, "Fazenda").await?;
        self.check_exists("crops", input.crop_id, "Cultura").await?;
        self.check_exists("harvests", input.harvest_id, "Safra")
            .await?;

        // Early-exit duplicate check; the unique index on the triple is the
        // conclusive guard under concurrent submissions.
        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM plantings WHERE farm_id = $1 AND crop_id = $2 AND harvest_id = $3",
        )
        .bind(input.farm_id)
        .bind(input.crop_id)
        .bind(input.harvest_id)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::conflict("Associação já existe"));
        }

        let planting = sqlx::query_as::<_, Planting>(
            r#"
            INSERT INTO plantings (farm_id, crop_id, harvest_id)
            VALUES ($1, $2, $3)
            RETURNING id, farm_id, crop_id, harvest_id, created_at
            "#,
        )
        .bind(input.farm_id)
        .bind(input.crop_id)
        .bind(input.harvest_id)
        .fetch_one(&self.db)
        .await?;

        Ok(planting)
    }

    /// Delete an association after explicit confirmation
    ///
    /// Removing the link never cascades to the farm, crop, or harvest.
    pub async fn delete_planting(&self, planting_id: Uuid, confirmed: bool) -> AppResult<()> {
        require_confirmation(confirmed)?;

        let result = sqlx::query("DELETE FROM plantings WHERE id = $1")
            .bind(planting_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Associação".to_string()));
        }

        Ok(())
    }

    async fn check_exists(&self, table: &str, id: Uuid, resource: &str) -> AppResult<()> {
        let exists = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {} WHERE id = $1",
            table
        ))
        .bind(id)
        .fetch_one(&self.db)
        .await?;

        if exists == 0 {
            return Err(AppError::NotFound(resource.to_string()));
        }

        Ok(())
    }
}
