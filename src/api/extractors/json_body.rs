//! JSON body extractor that reports rejections as [`AppError`].

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// JSON extractor whose rejections use the application error format.
///
/// No validation is applied beyond deserialization.
///
/// # Example
///
/// ```rust,ignore
/// use pickup_backend::api::extractors::JsonBody;
/// use pickup_backend::domain::NewUser;
///
/// async fn register(JsonBody(payload): JsonBody<NewUser>) {
///     // payload parsed, fields may still be missing
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        Ok(JsonBody(value))
    }
}
