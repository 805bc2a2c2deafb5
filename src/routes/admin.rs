//! Admin routes: user listing and role elevation.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::rbac::RequireAdmin;
use crate::routes::dashboard::AppointHrRequest;
use crate::services::dashboard;
use crate::AppState;

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> Result<Json<ApiResponse<Vec<Value>>>, AppError> {
    let users = dashboard::list_users(&state.db).await?;
    Ok(ApiResponse::success(users))
}

/// POST /api/v1/admin/appoint-hr — same elevation as the dashboard variant.
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
