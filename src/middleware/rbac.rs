//! Role-based access control extractors.
//!
//! The role is resolved from the database on every gated request — one
//! lookup call, no caching. Dashboard traffic is human-scale, so the extra
//! round trip is accepted.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::middleware::auth::CurrentUser;
use crate::models::user::Role;
use crate::services::auth as auth_service;
use crate::AppState;

/// Check a resolved role against an allow-list.
pub(crate) fn check_allowed(role: Option<Role>, allowed: &[Role]) -> Result<Role, AppError> {
    match role {
        Some(r) if allowed.contains(&r) => Ok(r),
        _ => Err(AppError::Forbidden("Access denied".to_string())),
    }
}

async fn resolve_and_check(
    parts: &mut Parts,
    state: &AppState,
    allowed: &[Role],
) -> Result<CurrentUser, AppError> {
    let user = CurrentUser::from_request_parts(parts, state).await?;
    let identifier = user.identifier().ok_or(AppError::Unauthorized)?;
    let role = auth_service::get_role(&state.db, identifier).await?;
    check_allowed(role, allowed)?;
    Ok(user)
}

/// Extractor that requires the admin role.
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = resolve_and_check(parts, state, &[Role::Admin]).await?;
        Ok(RequireAdmin(user))
    }
}

/// Extractor that requires the admin or hr role.
#[derive(Debug, Clone)]
pub struct RequireAdminOrHr(pub CurrentUser);

impl FromRequestParts<AppState> for RequireAdminOrHr {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = resolve_and_check(parts, state, &[Role::Admin, Role::Hr]).await?;
        Ok(RequireAdminOrHr(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_denied_on_admin_routes() {
        let err = check_allowed(Some(Role::Employee), &[Role::Admin]).unwrap_err();
        match err {
            AppError::Forbidden(msg) => assert_eq!(msg, "Access denied"),
            other => panic!("expected Forbidden, got {other:?}"),
        }
    }

    #[test]
    fn missing_role_denied() {
        assert!(check_allowed(None, &[Role::Admin, Role::Hr]).is_err());
    }

    #[test]
    fn admin_and_hr_pass_the_shared_gate() {
        assert_eq!(
            check_allowed(Some(Role::Admin), &[Role::Admin, Role::Hr]).unwrap(),
            Role::Admin
        );
        assert_eq!(
            check_allowed(Some(Role::Hr), &[Role::Admin, Role::Hr]).unwrap(),
            Role::Hr
        );
    }

    #[test]
    fn hr_denied_on_admin_only_gate() {
        assert!(check_allowed(Some(Role::Hr), &[Role::Admin]).is_err());
    }
}
