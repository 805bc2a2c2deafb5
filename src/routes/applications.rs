//! Job application routes, nested under recruitment postings.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::validation::ValidatedJson;
use crate::models::recruitment::{ApplicationStatusUpdate, JobApplication, JobApplicationInput};
use crate::services::recruitment as recruitment_service;
use crate::AppState;

/// GET /api/v1/recruitment/:recruitment_id/applications
pub async fn list_for_recruitment(
    State(state): State<AppState>,
    Path(recruitment_id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<JobApplication>>>, AppError> {
    let applications =
        recruitment_service::list_applications(&state.db, recruitment_id).await?;
    Ok(ApiResponse::success(applications))
}

/// GET /api/v1/applications/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<JobApplication>>>, AppError> {
    let application = recruitment_service::find_application(&state.db, id).await?;
    Ok(ApiResponse::success(application))
}

/// POST /api/v1/recruitment/:recruitment_id/applications
pub async fn create(
    State(state): State<AppState>,
    Path(recruitment_id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<JobApplicationInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    recruitment_service::create_application(&state.db, recruitment_id, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/applications/:id — status-only update.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ApplicationStatusUpdate>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    recruitment_service::update_application_status(&state.db, id, body.status).await?;
    Ok(ApiResponse::ok())
}
