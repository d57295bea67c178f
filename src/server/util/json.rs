use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::{validation::ValidationError, AppError};

/// JSON request body extractor whose rejection is an `AppError`.
///
/// Syntax and content type problems are rejected by `axum::Json` (400 and 415). The
/// parsed document is then deserialized into `T` while tracking the path, so a schema
/// violation reports the field that caused it as a `ValidationError`.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(document) = Json::<serde_json::Value>::from_request(req, state).await?;

        let body = serde_path_to_error::deserialize(document)
            .map_err(|e| ValidationError::from_body(e.path().to_string(), e.inner()))?;

        Ok(Self(body))
    }
}
