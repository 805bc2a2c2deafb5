//! Identity verification and role resolution.
//!
//! Accounts live in the external identity provider; this service verifies
//! provider-issued tokens and keeps the database's `{ uid, role }` mapping
//! in sync through the registration routine.

use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::user::{RegisterUser, Role};

/// Claims carried in an identity-provider token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Provider uid.
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub exp: i64,
    pub iat: Option<i64>,
}

/// Verify a provider-issued token and return its claims.
pub fn verify_identity_token(token: &str, secret: &str) -> Result<IdentityClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    jsonwebtoken::decode::<IdentityClaims>(token, &decoding_key, &validation)
        .map(|data| data.claims)
        .map_err(|_| AppError::Unauthorized)
}

/// Resolve the role for a uid or email. One lookup per call; gated requests
/// deliberately re-resolve every time.
pub async fn get_role(pool: &PgPool, identifier: &str) -> Result<Option<Role>, AppError> {
    let role = sqlx::query_scalar::<_, Role>("SELECT role FROM sp_get_user_role($1)")
        .bind(identifier)
        .fetch_optional(pool)
        .await?;
    Ok(role)
}

/// Register a provider account in the database.
pub async fn register(pool: &PgPool, input: &RegisterUser) -> Result<(), AppError> {
    sqlx::query("SELECT sp_register($1, $2, $3, $4, $5)")
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.uid)
        .bind(&input.display_picture)
        .bind(input.role.unwrap_or(Role::Employee))
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header};

    fn mint(secret: &str, exp_offset_secs: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = IdentityClaims {
            sub: "uid-123".to_string(),
            email: Some("user@example.com".to_string()),
            name: Some("Test User".to_string()),
            exp: now + exp_offset_secs,
            iat: Some(now),
        };
        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_verifies() {
        let token = mint("test-secret", 3600);
        let claims = verify_identity_token(&token, "test-secret").unwrap();
        assert_eq!(claims.sub, "uid-123");
        assert_eq!(claims.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = mint("test-secret", 3600);
        let err = verify_identity_token(&token, "other-secret").unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn expired_token_rejected() {
        // Expired well beyond the default leeway window.
        let token = mint("test-secret", -3600);
        assert!(verify_identity_token(&token, "test-secret").is_err());
    }

    #[test]
    fn garbage_token_rejected() {
        assert!(verify_identity_token("garbage.token.here", "secret").is_err());
    }
}
