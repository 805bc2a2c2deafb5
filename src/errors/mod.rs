//! Unified error handling with the `{ success, data, message, error }` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::ValidationErrors;

/// Field-level validation error surfaced in 400 responses.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Consistent JSON envelope for all API responses.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a successful result in the envelope.
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        })
    }

    /// Success with an explicit message and no payload.
    pub fn message(message: &str) -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: Some(message.to_string()),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    /// Bare `{ "success": true }` used by mutation endpoints.
    pub fn ok() -> Json<Self> {
        Json(Self {
            success: true,
            data: None,
            message: None,
            error: None,
        })
    }
}

/// Application error type mapping to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed")]
    Invalid(Vec<FieldError>),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Too many requests")]
    RateLimited,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Convert `validator` output into field-level 400 errors.
    pub fn from_validation(errors: ValidationErrors) -> Self {
        let mut fields = Vec::new();
        for (field, errs) in errors.field_errors() {
            for e in errs {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                fields.push(FieldError {
                    field: field.to_string(),
                    message,
                });
            }
        }
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        Self::Invalid(fields)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Error body: the envelope plus optional field-level detail.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<FieldError>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Invalid(fields) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    success: false,
                    message: Some("Validation failed".to_string()),
                    error: None,
                    errors: Some(fields),
                },
            ),
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    success: false,
                    message: Some(msg),
                    error: None,
                    errors: None,
                },
            ),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorBody {
                    success: false,
                    message: None,
                    error: Some("Invalid or expired token".to_string()),
                    errors: None,
                },
            ),
            AppError::Forbidden(msg) => (
                StatusCode::FORBIDDEN,
                ErrorBody {
                    success: false,
                    message: None,
                    error: Some(msg),
                    errors: None,
                },
            ),
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                ErrorBody {
                    success: false,
                    message: None,
                    error: Some("Too many requests, please try again later".to_string()),
                    errors: None,
                },
            ),
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        success: false,
                        message: None,
                        error: Some("An internal error occurred".to_string()),
                        errors: None,
                    },
                )
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        success: false,
                        message: None,
                        error: Some("An internal error occurred".to_string()),
                        errors: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn api_response_success_envelope() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "hello");
        assert!(json.get("message").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn api_response_ok_is_bare_success() {
        let response = ApiResponse::ok();
        let json = serde_json::to_value(&response.0).unwrap();
        assert_eq!(json, serde_json::json!({"success": true}));
    }

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
        name: String,
        #[validate(email(message = "Please provide a valid email address"))]
        email: String,
    }

    #[test]
    fn validation_errors_carry_field_names() {
        let probe = Probe {
            name: "x".to_string(),
            email: "not-an-email".to_string(),
        };
        let err = AppError::from_validation(probe.validate().unwrap_err());
        match err {
            AppError::Invalid(fields) => {
                assert_eq!(fields.len(), 2);
                assert!(fields.iter().any(|f| f.field == "name"));
                assert!(fields.iter().any(|f| f.field == "email"));
            }
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn app_error_display() {
        let err = AppError::Validation("Unknown report".to_string());
        assert_eq!(err.to_string(), "Validation error: Unknown report");
    }

    #[test]
    fn app_error_from_sqlx() {
        let sqlx_err = sqlx::Error::RowNotFound;
        let err: AppError = sqlx_err.into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
