//! Request body validation.
//!
//! [`ValidatedJson`] behaves like [`axum::Json`] but converts every rejection
//! (absent body, non-JSON content type, malformed JSON, schema mismatch) into
//! the service's uniform 400 validation error.

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::api::ApiError;

/// JSON extractor with a calculator-shaped rejection.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiError::validation(rejection.body_text())),
        }
    }
}
