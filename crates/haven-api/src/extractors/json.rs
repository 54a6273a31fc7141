//! JSON body extractor that maps rejections into the 400 taxonomy.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use haven_core::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Deserializes and validates a JSON body.
///
/// Malformed or incomplete bodies become `VALIDATION_ERROR` responses
/// instead of axum's default rejection statuses.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> FromRequest<AppState> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                AppError::validation(format!("Invalid request body: {}", rejection.body_text()))
            })?;

        value
            .validate()
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))?;

        Ok(Self(value))
    }
}
