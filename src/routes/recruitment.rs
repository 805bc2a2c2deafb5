//! Recruitment posting routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::validation::ValidatedJson;
use crate::models::recruitment::{Recruitment, RecruitmentInput};
use crate::services::recruitment as recruitment_service;
use crate::AppState;

/// GET /api/v1/recruitment
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Recruitment>>>, AppError> {
    let recruitments = recruitment_service::list(&state.db).await?;
    Ok(ApiResponse::success(recruitments))
}

/// GET /api/v1/recruitment/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<Recruitment>>>, AppError> {
    let recruitment = recruitment_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(recruitment))
}

/// POST /api/v1/recruitment
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RecruitmentInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    recruitment_service::create(&state.db, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/recruitment/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<RecruitmentInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    recruitment_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/recruitment/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    recruitment_service::delete(&state.db, id).await?;
    Ok(ApiResponse::ok())
}
