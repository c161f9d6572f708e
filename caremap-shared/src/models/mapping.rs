/// Patient/doctor mapping model and database operations
///
/// A mapping assigns one doctor to one patient. The pair is unique: the
/// `patient_doctor_mappings_pair_key` constraint rejects a second mapping
/// for the same (patient, doctor). Mappings inherit visibility from their
/// patient, so every query here joins through `patients.created_by`.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE patient_doctor_mappings (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     patient_id UUID NOT NULL REFERENCES patients(id) ON DELETE CASCADE,
///     doctor_id UUID NOT NULL REFERENCES doctors(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     CONSTRAINT patient_doctor_mappings_pair_key UNIQUE (patient_id, doctor_id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::doctor::Doctor;

/// Patient ↔ doctor assignment
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PatientDoctorMapping {
    /// Unique mapping ID (UUID v4)
    pub id: Uuid,

    /// Mapped patient
    pub patient_id: Uuid,

    /// Mapped doctor
    pub doctor_id: Uuid,

    /// When the mapping was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMapping {
    /// Patient to map
    pub patient_id: Uuid,

    /// Doctor to assign
    pub doctor_id: Uuid,
}

impl PatientDoctorMapping {
    /// Creates a new mapping
    ///
    /// # Errors
    ///
    /// Returns a database error carrying the
    /// `patient_doctor_mappings_pair_key` constraint when the (patient,
    /// doctor) pair already exists, and a foreign-key violation when either
    /// side is missing.
    pub async fn create(pool: &PgPool, data: CreateMapping) -> Result<Self, sqlx::Error> {
        let mapping = sqlx::query_as::<_, PatientDoctorMapping>(
            r#"
            INSERT INTO patient_doctor_mappings (patient_id, doctor_id)
            VALUES ($1, $2)
            RETURNING id, patient_id, doctor_id, created_at
            "#,
        )
        .bind(data.patient_id)
        .bind(data.doctor_id)
        .fetch_one(pool)
        .await?;

        Ok(mapping)
    }

    /// Finds a mapping by ID, visible only through an owned patient
    pub async fn find_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mapping = sqlx::query_as::<_, PatientDoctorMapping>(
            r#"
            SELECT m.id, m.patient_id, m.doctor_id, m.created_at
            FROM patient_doctor_mappings m
            JOIN patients p ON p.id = m.patient_id
            WHERE m.id = $1 AND p.created_by = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(mapping)
    }

    /// Lists mappings whose patient belongs to the user, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let mappings = sqlx::query_as::<_, PatientDoctorMapping>(
            r#"
            SELECT m.id, m.patient_id, m.doctor_id, m.created_at
            FROM patient_doctor_mappings m
            JOIN patients p ON p.id = m.patient_id
            WHERE p.created_by = $1
            ORDER BY m.created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(mappings)
    }

    /// Counts mappings whose patient belongs to the user
    pub async fn count_for_user(pool: &PgPool, user_id: Uuid) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM patient_doctor_mappings m
            JOIN patients p ON p.id = m.patient_id
            WHERE p.created_by = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Deletes a mapping, restricted to owners of the mapped patient
    ///
    /// Returns true if a row was deleted.
    pub async fn delete_for_user(
        pool: &PgPool,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM patient_doctor_mappings m
            USING patients p
            WHERE m.id = $1 AND p.id = m.patient_id AND p.created_by = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns all doctors mapped to a patient
    ///
    /// The core lookup: doctors joined through the mapping table,
    /// restricted to patients the user owns. A patient with no mappings,
    /// an unknown patient id, and another user's patient all yield an
    /// empty list. Duplicates are impossible because of the pair
    /// uniqueness constraint.
    pub async fn doctors_for_patient(
        pool: &PgPool,
        patient_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<Doctor>, sqlx::Error> {
        let doctors = sqlx::query_as::<_, Doctor>(
            r#"
            SELECT d.id, d.name, d.specialization, d.created_at, d.updated_at
            FROM doctors d
            JOIN patient_doctor_mappings m ON m.doctor_id = d.id
            JOIN patients p ON p.id = m.patient_id
            WHERE m.patient_id = $1 AND p.created_by = $2
            "#,
        )
        .bind(patient_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(doctors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mapping_struct() {
        let patient_id = Uuid::new_v4();
        let doctor_id = Uuid::new_v4();

        let create = CreateMapping {
            patient_id,
            doctor_id,
        };

        assert_eq!(create.patient_id, patient_id);
        assert_eq!(create.doctor_id, doctor_id);
    }
}
