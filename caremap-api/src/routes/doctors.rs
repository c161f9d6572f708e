/// Doctor endpoints
///
/// Doctors are globally visible: any authenticated user can list, create,
/// update, or delete them.
///
/// # Endpoints
///
/// - `GET    /v1/doctors` - List doctors
/// - `POST   /v1/doctors` - Create a doctor
/// - `GET    /v1/doctors/:id` - Get a doctor
/// - `PUT    /v1/doctors/:id` - Update a doctor
/// - `DELETE /v1/doctors/:id` - Delete a doctor (and its mappings)

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
    routes::{patients::DeletedResponse, Pagination},
};
use axum::{
    extract::{Path, Query, State},
    Json,
};
use caremap_shared::models::doctor::{CreateDoctor, Doctor, UpdateDoctor};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Create doctor request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDoctorRequest {
    /// Doctor name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    /// Medical specialization
    #[validate(length(min = 1, max = 255, message = "Specialization must be 1-255 characters"))]
    pub specialization: String,
}

/// Update doctor request
///
/// Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateDoctorRequest {
    /// New name
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,

    /// New specialization
    #[validate(length(min = 1, max = 255, message = "Specialization must be 1-255 characters"))]
    pub specialization: Option<String>,
}

/// List doctors response
#[derive(Debug, Serialize)]
pub struct ListDoctorsResponse {
    /// Doctors, newest first
    pub doctors: Vec<Doctor>,

    /// Total doctor count (ignores pagination)
    pub total: i64,
}

/// List doctors
pub async fn list_doctors(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> ApiResult<Json<ListDoctorsResponse>> {
    let pagination = pagination.clamped();

    let doctors = Doctor::list(&state.db, pagination.limit, pagination.offset).await?;
    let total = Doctor::count(&state.db).await?;

    Ok(Json(ListDoctorsResponse { doctors, total }))
}

/// Create a doctor
///
/// # Errors
///
/// - `422 Unprocessable Entity`: validation failed
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(req): Json<CreateDoctorRequest>,
) -> ApiResult<Json<Doctor>> {
    req.validate()?;

    let doctor = Doctor::create(
        &state.db,
        CreateDoctor {
            name: req.name,
            specialization: req.specialization,
        },
    )
    .await?;

    Ok(Json(doctor))
}

/// Get a doctor by ID
///
/// # Errors
///
/// - `404 Not Found`: no such doctor
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Doctor>> {
    let doctor = Doctor::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(doctor))
}

/// Update a doctor
///
/// # Errors
///
/// - `404 Not Found`: no such doctor
/// - `422 Unprocessable Entity`: validation failed
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDoctorRequest>,
) -> ApiResult<Json<Doctor>> {
    req.validate()?;

    if req.name.is_none() && req.specialization.is_none() {
        return Err(ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "body".to_string(),
            message: "At least one field must be provided".to_string(),
        }]));
    }

    let doctor = Doctor::update(
        &state.db,
        id,
        UpdateDoctor {
            name: req.name,
            specialization: req.specialization,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(doctor))
}

/// Delete a doctor
///
/// Any mappings referencing the doctor are removed by the cascade.
///
/// # Errors
///
/// - `404 Not Found`: no such doctor
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<DeletedResponse>> {
    let deleted = Doctor::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Doctor not found".to_string()));
    }

    Ok(Json(DeletedResponse { deleted }))
}
