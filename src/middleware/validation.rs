//! JSON body extractor that validates after deserializing.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// `Json<T>` that additionally runs `validator` rules, turning failures
/// into field-level 400 responses in the standard envelope.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid request body: {}", e.body_text())))?;
        value
            .validate()
            .map_err(AppError::from_validation)?;
        Ok(ValidatedJson(value))
    }
}
