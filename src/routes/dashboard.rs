//! Dashboard routes: aggregated reads for the admin/hr overview page.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::{RequireAdmin, RequireAdminOrHr};
use crate::services::dashboard::{self, DashboardOverview, DashboardQuery};
use crate::AppState;

/// GET /api/v1/dashboard/stats
pub async fn stats(
    State(state): State<AppState>,
    RequireAdminOrHr(_user): RequireAdminOrHr,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let stats = dashboard::get_stats(&state.db, query.employee_id()?).await?;
    Ok(ApiResponse::success(stats))
}

/// GET /api/v1/dashboard/upcoming?days=7
pub async fn upcoming(
    State(state): State<AppState>,
    RequireAdminOrHr(_user): RequireAdminOrHr,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let events = dashboard::get_upcoming_events(
        &state.db,
        query.days_or_default(),
        query.employee_id()?,
    )
    .await?;
    Ok(ApiResponse::success(events))
}

/// GET /api/v1/dashboard/notifications
pub async fn notifications(
    State(state): State<AppState>,
    RequireAdminOrHr(_user): RequireAdminOrHr,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let notifications =
        dashboard::get_notifications(&state.db, query.employee_id()?).await?;
    Ok(ApiResponse::success(notifications))
}

/// GET /api/v1/dashboard/tasks
pub async fn tasks(
    State(state): State<AppState>,
    RequireAdminOrHr(_user): RequireAdminOrHr,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let tasks = dashboard::get_tasks(&state.db, query.employee_id()?).await?;
    Ok(ApiResponse::success(tasks))
}

/// GET /api/v1/dashboard/overview — all four reads, joined.
pub async fn overview(
    State(state): State<AppState>,
    RequireAdminOrHr(_user): RequireAdminOrHr,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ApiResponse<DashboardOverview>>, AppError> {
    let overview = dashboard::get_overview(
        &state.db,
        query.days_or_default(),
        query.employee_id()?,
    )
    .await?;
    Ok(ApiResponse::success(overview))
}

/// POST /api/v1/dashboard/sync
pub async fn sync(
    State(state): State<AppState>,
    RequireAdminOrHr(_user): RequireAdminOrHr,
) -> Result<Json<ApiResponse<()>>, AppError> {
    dashboard::sync_calendar(&state.db).await?;
    Ok(ApiResponse::ok())
}

#[derive(Debug, Deserialize)]
pub struct AppointHrRequest {
    pub uid: Option<String>,
}

/// POST /api/v1/dashboard/appoint-hr — admin only.
pub async fn appoint_hr(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(body): Json<AppointHrRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let uid = body
        .uid
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("uid required".to_string()))?;
    dashboard::appoint_hr(&state.db, uid).await?;
    Ok(ApiResponse::ok())
}
