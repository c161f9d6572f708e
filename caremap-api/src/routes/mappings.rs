/// Patient ↔ doctor mapping endpoints
///
/// Mappings inherit visibility from their patient: you can only create,
/// list, look up, or delete mappings for patients you own. The retrieve
/// endpoint is deliberately non-standard — `GET /v1/mappings/:patient_id`
/// returns the array of doctors assigned to that patient rather than a
/// single mapping record.
///
/// # Endpoints
///
/// - `GET    /v1/mappings` - List own mappings
/// - `POST   /v1/mappings` - Assign a doctor to one of your patients
/// - `GET    /v1/mappings/:patient_id` - All doctors assigned to the patient
/// - `DELETE /v1/mappings/:id` - Remove an assignment

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::{patients::DeletedResponse, Pagination},
};
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use caremap_shared::{
    auth::middleware::AuthContext,
    models::{
        doctor::Doctor,
        mapping::{CreateMapping, PatientDoctorMapping},
        patient::Patient,
    },
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create mapping request
#[derive(Debug, Deserialize)]
pub struct CreateMappingRequest {
    /// Patient to map (must be owned by the requester)
    pub patient_id: Uuid,

    /// Doctor to assign
    pub doctor_id: Uuid,
}

/// List mappings response
#[derive(Debug, Serialize)]
pub struct ListMappingsResponse {
    /// Mappings for the requester's patients, newest first
    pub mappings: Vec<PatientDoctorMapping>,

    /// Total count (ignores pagination)
    pub total: i64,
}

/// List mappings for the requester's patients
pub async fn list_mappings(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<ListMappingsResponse>> {
    let pagination = pagination.clamped();

    let mappings = PatientDoctorMapping::list_for_user(
        &state.db,
        auth.user_id,
        pagination.limit,
        pagination.offset,
    )
    .await?;

    let total = PatientDoctorMapping::count_for_user(&state.db, auth.user_id).await?;

    Ok(Json(ListMappingsResponse { mappings, total }))
}

/// Assign a doctor to one of your patients
///
/// # Errors
///
/// - `404 Not Found`: patient doesn't exist or belongs to another user,
///   or the doctor doesn't exist
/// - `409 Conflict`: this (patient, doctor) pair is already mapped
pub async fn create_mapping(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateMappingRequest>,
) -> ApiResult<Json<PatientDoctorMapping>> {
    // Ownership check before touching the mapping table; a foreign patient
    // id must be indistinguishable from a missing one
    Patient::find_for_user(&state.db, req.patient_id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Patient not found".to_string()))?;

    Doctor::find_by_id(&state.db, req.doctor_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Doctor not found".to_string()))?;

    // Duplicate pairs surface as a unique-constraint violation (409)
    let mapping = PatientDoctorMapping::create(
        &state.db,
        CreateMapping {
            patient_id: req.patient_id,
            doctor_id: req.doctor_id,
        },
    )
    .await?;

    Ok(Json(mapping))
}

/// Get all doctors assigned to a patient
///
/// The body is the bare array of doctor records, empty when the patient
/// has no mappings. A patient id that doesn't exist, or that belongs to
/// another user, is reported as not found.
pub async fn get_patient_doctors(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(patient_id): Path<Uuid>,
) -> ApiResult<Json<Vec<Doctor>>> {
    Patient::find_for_user(&state.db, patient_id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Patient not found".to_string()))?;

    let doctors =
        PatientDoctorMapping::doctors_for_patient(&state.db, patient_id, auth.user_id).await?;

    Ok(Json(doctors))
}

/// Remove a doctor assignment
///
/// # Errors
///
/// - `404 Not Found`: no such mapping, or its patient belongs to another user
pub async fn delete_mapping(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = PatientDoctorMapping::delete_for_user(&state.db, id, auth.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Mapping not found".to_string()));
    }

    Ok(Json(DeletedResponse { deleted }))
}
