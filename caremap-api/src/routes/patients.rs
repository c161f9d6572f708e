/// Patient endpoints
///
/// All operations are scoped to the authenticated user: a patient created
/// by user A does not exist as far as user B is concerned — list omits it
/// and read/update/delete return 404.
///
/// # Endpoints
///
/// - `GET    /v1/patients` - List own patients
/// - `POST   /v1/patients` - Create a patient (stamped with the requester)
/// - `GET    /v1/patients/:id` - Get one of your patients
/// - `PUT    /v1/patients/:id` - Update one of your patients
/// - `DELETE /v1/patients/:id` - Delete one of your patients

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
    routes::Pagination,
};
use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use caremap_shared::{
    auth::middleware::AuthContext,
    models::patient::{CreatePatient, Gender, Patient, UpdatePatient},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create patient request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePatientRequest {
    /// Patient name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Age in years
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i32,

    /// Gender: "male", "female", or "other"
    pub gender: Gender,
}

/// Update patient request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdatePatientRequest {
    /// New name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    /// New age
    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: Option<i32>,

    /// New gender
    pub gender: Option<Gender>,
}

/// List patients response
#[derive(Debug, Serialize)]
pub struct ListPatientsResponse {
    /// The requester's patients
    pub patients: Vec<Patient>,

    /// Total count of the requester's patients (ignores pagination)
    pub total: i64,
}

/// Delete response
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    /// Whether the record was deleted
    pub deleted: bool,
}

/// List own patients
pub async fn list_patients(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<ListPatientsResponse>> {
    let pagination = pagination.clamped();

    let patients =
        Patient::list_for_user(&state.db, auth.user_id, pagination.limit, pagination.offset)
            .await?;
    let total = Patient::count_for_user(&state.db, auth.user_id).await?;

    Ok(Json(ListPatientsResponse { patients, total }))
}

/// Create a patient owned by the requester
///
/// # Errors
///
/// - `422 Unprocessable Entity`: validation failed
pub async fn create_patient(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreatePatientRequest>,
) -> ApiResult<Json<Patient>> {
    req.validate()?;

    let patient = Patient::create(
        &state.db,
        auth.user_id,
        CreatePatient {
            name: req.name,
            age: req.age,
            gender: req.gender,
        },
    )
    .await?;

    Ok(Json(patient))
}

/// Get one of your patients
///
/// # Errors
///
/// - `404 Not Found`: no such patient, or it belongs to another user
pub async fn get_patient(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Patient>> {
    let patient = Patient::find_for_user(&state.db, id, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Patient not found".to_string()))?;

    Ok(Json(patient))
}

/// Update one of your patients
///
/// # Errors
///
/// - `404 Not Found`: no such patient, or it belongs to another user
/// - `422 Unprocessable Entity`: validation failed
pub async fn update_patient(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePatientRequest>,
) -> ApiResult<Json<Patient>> {
    req.validate()?;

    if req.name.is_none() && req.age.is_none() && req.gender.is_none() {
        return Err(ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "body".to_string(),
            message: "At least one field must be provided".to_string(),
        }]));
    }

    let patient = Patient::update_for_user(
        &state.db,
        id,
        auth.user_id,
        UpdatePatient {
            name: req.name,
            age: req.age,
            gender: req.gender,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Patient not found".to_string()))?;

    Ok(Json(patient))
}

/// Delete one of your patients
///
/// The patient's mappings are removed along with it.
///
/// # Errors
///
/// - `404 Not Found`: no such patient, or it belongs to another user
pub async fn delete_patient(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = Patient::delete_for_user(&state.db, id, auth.user_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Patient not found".to_string()));
    }

    Ok(Json(DeletedResponse { deleted }))
}
