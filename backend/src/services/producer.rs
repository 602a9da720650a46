//! Producer management service

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::ProducerInput;
use shared::validation::{normalize_tax_id, validate_producer_input};

use super::require_confirmation;

/// Producer service for managing rural producers
#[derive(Clone)]
pub struct ProducerService {
    db: PgPool,
}

/// Producer record
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Producer {
    pub id: Uuid,
    pub name: String,
    /// Digits-only CPF or CNPJ.
    pub cpf_cnpj: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProducerService {
    /// Create a new ProducerService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Get all producers
    pub async fn list_producers(&self) -> AppResult<Vec<Producer>> {
        let producers = sqlx::query_as::<_, Producer>(
            r#"
            SELECT id, name, cpf_cnpj, created_at, updated_at
            FROM producers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(producers)
    }

    /// Get a producer by id
    pub async fn get_producer(&self, producer_id: Uuid) -> AppResult<Producer> {
        let producer = sqlx::query_as::<_, Producer>(
            "SELECT id, name, cpf_cnpj, created_at, updated_at FROM producers WHERE id = $1",
        )
        .bind(producer_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Produtor".to_string()))?;

        Ok(producer)
    }

    /// Create a new producer
    pub async fn create_producer(&self, input: ProducerInput) -> AppResult<Producer> {
        validate_producer_input(&input).map_err(AppError::validation)?;

        let tax_id = normalize_tax_id(&input.cpf_cnpj);

        // Early-exit duplicate check; the unique index on cpf_cnpj is the
        // conclusive guard under concurrent submissions.
        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM producers WHERE cpf_cnpj = $1",
        )
        .bind(&tax_id)
        .fetch_one(&self.db)
        .await?;

        if existing > 0 {
            return Err(AppError::conflict("CPF/CNPJ já cadastrado"));
        }

        let producer = sqlx::query_as::<_, Producer>(
            r#"
            INSERT INTO producers (name, cpf_cnpj)
            VALUES ($1, $2)
            RETURNING id, name, cpf_cnpj, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&tax_id)
        .fetch_one(&self.db)
        .await?;

        Ok(producer)
    }

    /// Replace a producer
    pub async fn update_producer(
        &self,
        producer_id: Uuid,
        input: ProducerInput,
    ) -> AppResult<Producer> {
        // Check if producer exists
        self.get_producer(producer_id).await?;

        validate_producer_input(&input).map_err(AppError::validation)?;

        let tax_id = normalize_tax_id(&input.cpf_cnpj);

        // Check for duplicate tax ID, excluding the record itself
        let duplicate = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM producers WHERE cpf_cnpj = $1 AND id != $2",
        )
        .bind(&tax_id)
        .bind(producer_id)
        .fetch_one(&self.db)
        .await?;

        if duplicate > 0 {
            return Err(AppError::conflict("CPF/CNPJ já cadastrado"));
        }

        let producer = sqlx::query_as::<_, Producer>(
            r#"
            UPDATE producers
            SET name = $1, cpf_cnpj = $2, updated_at = now()
            WHERE id = $3
            RETURNING id, name, cpf_cnpj, created_at, updated_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&tax_id)
        .bind(producer_id)
        .fetch_one(&self.db)
        .await?;

        Ok(producer)
    }

    /// Delete a producer after explicit confirmation
    pub async fn delete_producer(&self, producer_id: Uuid, confirmed: bool) -> AppResult<()> {
        require_confirmation(confirmed)?;

        let result = sqlx::query("DELETE FROM producers WHERE id = $1")
            .bind(producer_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Produtor".to_string()));
        }

        Ok(())
    }
}
