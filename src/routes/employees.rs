//! Employee routes.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::validation::ValidatedJson;
use crate::models::employee::{Employee, EmployeeInput, EmployeeMin};
use crate::services::employees as employee_service;
use crate::AppState;

/// GET /api/v1/employees
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let employees = employee_service::list(&state.db).await?;
    Ok(ApiResponse::success(employees))
}

/// GET /api/v1/min-employees — id/name/position directory for pickers.
pub async fn list_min(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmployeeMin>>>, AppError> {
    let employees = employee_service::list_min(&state.db).await?;
    Ok(ApiResponse::success(employees))
}

/// GET /api/v1/employees/:id — missing rows are success with null data.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<Employee>>>, AppError> {
    let employee = employee_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(employee))
}

/// POST /api/v1/employees
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<EmployeeInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    employee_service::create(&state.db, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/employees/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<EmployeeInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    employee_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/employees/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    employee_service::delete(&state.db, id).await?;
    Ok(ApiResponse::ok())
}
