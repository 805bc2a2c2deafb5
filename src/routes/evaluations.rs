//! Performance evaluation routes.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::validation::ValidatedJson;
use crate::models::evaluation::{EvaluationFilters, EvaluationInput, PerformanceEvaluation};
use crate::services::evaluations as evaluation_service;
use crate::AppState;

/// GET /api/v1/evaluations
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PerformanceEvaluation>>>, AppError> {
    let evaluations = evaluation_service::list(&state.db).await?;
    Ok(ApiResponse::success(evaluations))
}

/// GET /api/v1/evaluations/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Option<PerformanceEvaluation>>>, AppError> {
    let evaluation = evaluation_service::find_by_id(&state.db, id).await?;
    Ok(ApiResponse::success(evaluation))
}

/// GET /api/v1/employees/:employee_id/evaluations
pub async fn list_by_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<Uuid>,
    Query(filters): Query<EvaluationFilters>,
) -> Result<Json<ApiResponse<Vec<PerformanceEvaluation>>>, AppError> {
    let evaluations =
        evaluation_service::list_by_employee(&state.db, employee_id, &filters).await?;
    Ok(ApiResponse::success(evaluations))
}

/// POST /api/v1/evaluations
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<EvaluationInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    evaluation_service::create(&state.db, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/evaluations/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<EvaluationInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    evaluation_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/evaluations/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    evaluation_service::delete(&state.db, id).await?;
    Ok(ApiResponse::ok())
}
