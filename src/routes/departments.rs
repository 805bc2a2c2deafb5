//! Department routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::validation::ValidatedJson;
use crate::models::department::{Department, DepartmentInput};
use crate::services::departments as department_service;
use crate::AppState;

/// GET /api/v1/departments
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Department>>>, AppError> {
    let departments = department_service::list(&state.db).await?;
    Ok(ApiResponse::success(departments))
}

/// GET /api/v1/departments/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<Department>>>, AppError> {
    let department = department_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(department))
}

/// POST /api/v1/departments
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<DepartmentInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    department_service::create(&state.db, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/departments/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<DepartmentInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    department_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/departments/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    department_service::delete(&state.db, id).await?;
    Ok(ApiResponse::ok())
}
