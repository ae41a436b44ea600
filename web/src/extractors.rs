//! Custom Axum extractors.
//!
//! - [`JsonBody`]: `Json<T>` whose rejections render as [`AppError`] bodies

use crate::error::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Json, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;

/// JSON request body.
///
/// Behaves like [`axum::Json`], except a missing content type, malformed
/// JSON, or a payload of the wrong shape is rejected as a 400 `AppError`
/// so every error response has the same `{ "error", "code" }` body.
///
/// # Example
///
/// ```ignore
/// async fn handler(JsonBody(form): JsonBody<RsvpSubmission>) -> impl IntoResponse {
///     format!("Hello {:?}", form.name)
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(reject(&rejection)),
        }
    }
}

fn reject(rejection: &JsonRejection) -> AppError {
    AppError::bad_request(rejection.body_text())
}
