//! Bearer-token authentication extractor.
//!
//! Tokens are issued by the external identity provider; this layer only
//! verifies them and attaches the identity claims to the request. There is
//! no refresh, revocation list, or session store.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::errors::AppError;
use crate::services::auth as auth_service;
use crate::AppState;

/// Authenticated identity extracted from the `Authorization` header.
///
/// Use as an Axum extractor in handlers that require authentication:
/// ```ignore
/// async fn handler(current_user: CurrentUser) -> impl IntoResponse { ... }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl CurrentUser {
    /// Identifier used for the per-request role lookup: uid, or email as a
    /// fallback for accounts provisioned before uids were backfilled.
    pub fn identifier(&self) -> Option<&str> {
        if !self.uid.is_empty() {
            Some(&self.uid)
        } else {
            self.email.as_deref()
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let claims =
            auth_service::verify_identity_token(token, &state.config.auth_token_secret)?;

        Ok(CurrentUser {
            uid: claims.sub,
            email: claims.email,
            name: claims.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_prefers_uid() {
        let user = CurrentUser {
            uid: "u-123".to_string(),
            email: Some("u@example.com".to_string()),
            name: None,
        };
        assert_eq!(user.identifier(), Some("u-123"));
    }

    #[test]
    fn identifier_falls_back_to_email() {
        let user = CurrentUser {
            uid: String::new(),
            email: Some("u@example.com".to_string()),
            name: None,
        };
        assert_eq!(user.identifier(), Some("u@example.com"));

        let anonymous = CurrentUser {
            uid: String::new(),
            email: None,
            name: None,
        };
        assert_eq!(anonymous.identifier(), None);
    }
}
