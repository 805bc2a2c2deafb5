//! Training program and enrollment routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::validation::ValidatedJson;
use crate::models::training::{
    EnrollmentInput, TrainingEnrollment, TrainingProgram, TrainingProgramInput,
};
use crate::services::training as training_service;
use crate::AppState;

/// GET /api/v1/training
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TrainingProgram>>>, AppError> {
    let programs = training_service::list(&state.db).await?;
    Ok(ApiResponse::success(programs))
}

/// GET /api/v1/training/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<TrainingProgram>>>, AppError> {
    let program = training_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(program))
}

/// POST /api/v1/training
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<TrainingProgramInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    training_service::create(&state.db, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/training/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<TrainingProgramInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    training_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/training/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    training_service::delete(&state.db, id).await?;
    Ok(ApiResponse::ok())
}

/// GET /api/v1/training/:program_id/enrollments
pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(program_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<TrainingEnrollment>>>, AppError> {
    let enrollments = training_service::list_enrollments(&state.db, program_id).await?;
    Ok(ApiResponse::success(enrollments))
}

/// POST /api/v1/training/:program_id/enrollments
pub async fn create_enrollment(
    State(state): State<AppState>,
    Path(program_id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<EnrollmentInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    training_service::create_enrollment(&state.db, program_id, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/enrollments/:id
pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<EnrollmentInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    training_service::update_enrollment(&state.db, id, &body).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/enrollments/:id
pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    training_service::delete_enrollment(&state.db, id).await?;
    Ok(ApiResponse::ok())
}
