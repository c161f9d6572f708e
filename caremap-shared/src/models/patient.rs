/// Patient model and database operations
///
/// Every patient is owned by the user that created it, and every read,
/// update, and delete is scoped by that owner at query time. A patient
/// belonging to another user behaves exactly like a missing row.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE gender AS ENUM ('male', 'female', 'other');
///
/// CREATE TABLE patients (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(255) NOT NULL,
///     age INTEGER NOT NULL CHECK (age >= 0),
///     gender gender NOT NULL,
///     created_by UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Patient record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    /// Unique patient ID (UUID v4)
    pub id: Uuid,

    /// Patient name
    pub name: String,

    /// Age in years
    pub age: i32,

    /// Gender
    pub gender: Gender,

    /// User that created (and owns) this patient
    pub created_by: Uuid,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new patient
///
/// `created_by` is stamped from the authenticated user, never taken from
/// client input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatient {
    /// Patient name
    pub name: String,

    /// Age in years (non-negative)
    pub age: i32,

    /// Gender
    pub gender: Gender,
}

/// Input for updating a patient
///
/// Only non-None fields are updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePatient {
    /// New name
    pub name: Option<String>,

    /// New age
    pub age: Option<i32>,

    /// New gender
    pub gender: Option<Gender>,
}

impl Patient {
    /// Creates a new patient owned by `created_by`
    pub async fn create(
        pool: &PgPool,
        created_by: Uuid,
        data: CreatePatient,
    ) -> Result<Self, sqlx::Error> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (name, age, gender, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, age, gender, created_by, created_at, updated_at
            "#,
        )
        .bind(data.name)
        .bind(data.age)
        .bind(data.gender)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(patient)
    }

    /// Finds a patient by ID, visible only to its owner
    ///
    /// Returns None both when the row doesn't exist and when it belongs to
    /// a different user; callers can't distinguish the two.
    pub async fn find_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, name, age, gender, created_by, created_at, updated_at
            FROM patients
            WHERE id = $1 AND created_by = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(patient)
    }

    /// Lists the user's own patients with pagination, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let patients = sqlx::query_as::<_, Patient>(
            r#"
            SELECT id, name, age, gender, created_by, created_at, updated_at
            FROM patients
            WHERE created_by = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(patients)
    }

    /// Updates a patient, restricted to its owner
    ///
    /// Returns None if the patient doesn't exist or belongs to another user.
    pub async fn update_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
        data: UpdatePatient,
    ) -> Result<Option<Self>, sqlx::Error> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            UPDATE patients
            SET name = COALESCE($3, name),
                age = COALESCE($4, age),
                gender = COALESCE($5, gender),
                updated_at = NOW()
            WHERE id = $1 AND created_by = $2
            RETURNING id, name, age, gender, created_by, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(data.name)
        .bind(data.age)
        .bind(data.gender)
        .fetch_optional(pool)
        .await?;

        Ok(patient)
    }

    /// Deletes a patient, restricted to its owner
    ///
    /// Mappings of the patient are removed by the cascade.
    /// Returns true if a row was deleted.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1 AND created_by = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Counts the user's own patients
    pub async fn count_for_user(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM patients WHERE created_by = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(
            serde_json::from_str::<Gender>("\"other\"").unwrap(),
            Gender::Other
        );
        assert!(serde_json::from_str::<Gender>("\"unknown\"").is_err());
    }

    #[test]
    fn test_update_patient_default() {
        let update = UpdatePatient::default();
        assert!(update.name.is_none());
        assert!(update.age.is_none());
        assert!(update.gender.is_none());
    }
}
