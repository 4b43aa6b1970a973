//! JSON body extractor - Deserialization with the application's error shape.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;

/// JSON extractor whose rejections become [`AppError::MalformedRequest`].
///
/// A missing body, a wrong content type, invalid JSON, a top-level value
/// that is not an object, a missing field or a field of the wrong type all
/// end up as the same 400.
///
/// # Example
///
/// ```rust,ignore
/// use serde::Deserialize;
/// use user_directory::api::extractors::JsonBody;
///
/// #[derive(Deserialize)]
/// struct Credentials {
///     email: String,
///     password: String,
/// }
///
/// async fn login(JsonBody(payload): JsonBody<Credentials>) {
///     // both fields are present and are strings
/// }
/// ```
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| {
                tracing::debug!(reason = %e.body_text(), "Unusable JSON body");
                AppError::MalformedRequest
            })?;

        from_object(value).map(JsonBody)
    }
}

/// Deserialize `T` from a JSON object.
///
/// Serde accepts a sequence for a struct, so arrays are refused here
/// before deserialization.
pub fn from_object<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        tracing::debug!("JSON body is not an object");
        return Err(AppError::MalformedRequest);
    }

    serde_json::from_value(value).map_err(|e| {
        tracing::debug!(reason = %e, "JSON body does not match the request shape");
        AppError::MalformedRequest
    })
}
