/// Doctor model and database operations
///
/// Doctors are independent records with no ownership: every authenticated
/// user sees the same doctor list. Deleting a doctor cascades to any
/// mappings referencing it.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE doctors (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     specialization VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Doctor record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Doctor {
    /// Unique doctor ID (UUID v4)
    pub id: Uuid,

    /// Doctor name
    pub name: String,

    /// Medical specialization (e.g., "Cardiology")
    pub specialization: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new doctor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctor {
    /// Doctor name
    pub name: String,

    /// Medical specialization
    pub specialization: String,
}

/// Input for updating a doctor
///
/// Only non-None fields are updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDoctor {
    /// New name
    pub name: Option<String>,

    /// New specialization
    pub specialization: Option<String>,
}

impl Doctor {
    /// Creates a new doctor
    pub async fn create(pool: &PgPool, data: CreateDoctor) -> Result<Self, sqlx::Error> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            INSERT INTO doctors (name, specialization)
            VALUES ($1, $2)
            RETURNING id, name, specialization, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.specialization)
        .fetch_one(pool)
        .await?;

        Ok(doctor)
    }

    /// Finds a doctor by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, name, specialization, created_at, updated_at
            FROM doctors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(doctor)
    }

    /// Lists doctors with pagination, newest first
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Self>, sqlx::Error> {
        let doctors = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT id, name, specialization, created_at, updated_at
            FROM doctors
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(doctors)
    }

    /// Updates a doctor
    ///
    /// Only non-None fields change; `updated_at` is always bumped.
    /// Returns None if the doctor doesn't exist.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: UpdateDoctor,
    ) -> Result<Option<Self>, sqlx::Error> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            UPDATE doctors
            SET name = COALESCE($2, name),
                specialization = COALESCE($3, specialization),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, specialization, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.specialization)
        .fetch_optional(pool)
        .await?;

        Ok(doctor)
    }

    /// Deletes a doctor by ID
    ///
    /// Mappings referencing the doctor are removed by the cascade.
    /// Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts total number of doctors
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM doctors")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
