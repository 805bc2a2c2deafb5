//! Authentication routes: registration and the current-user profile.

use axum::{extract::State, Json};

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::middleware::validation::ValidatedJson;
use crate::models::user::{MeResponse, RegisterUser};
use crate::services::auth as auth_service;
use crate::AppState;

/// POST /api/v1/auth/register — record a provider account in the database.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<RegisterUser>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    auth_service::register(&state.db, &body).await?;
    Ok(ApiResponse::message("Registered"))
}

/// GET /api/v1/auth/me — current identity plus its resolved role.
pub async fn me(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<ApiResponse<MeResponse>>, AppError> {
    let identifier = current_user.identifier().ok_or(AppError::Unauthorized)?;
    let role = auth_service::get_role(&state.db, identifier).await?;
    Ok(ApiResponse::success(MeResponse {
        uid: current_user.uid,
        email: current_user.email,
        name: current_user.name,
        role,
    }))
}
