use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

/// Failures of the document store adapter.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store was never initialized or could not be reached at startup.
    ///
    /// Results in 503 Service Unavailable; the request fails explicitly instead of
    /// returning partial data.
    #[error("Database not available")]
    Unavailable,

    /// The store is connected but the operation itself failed.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        match self {
            Self::Unavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Db(err) => InternalServerError(err).into_response(),
        }
    }
}
