//! JSON body extractor that validates before the handler runs.

use crate::error::AppError;
use crate::service::validate_dto;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Decoded and validated request body. Invalid input is rejected with 400 and a report of
/// every failing field; the handler never sees it. A body over the configured limit is 413.
#[derive(Clone, Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge,
                _ => AppError::BadRequest(rejection.body_text()),
            })?;
        if let Err(e) = validate_dto(&value) {
            tracing::debug!(error = %e, "request rejected by validation");
            return Err(e);
        }
        Ok(ValidatedJson(value))
    }
}
