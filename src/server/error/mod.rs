//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type
//! wrapping the domain-specific errors; each of them maps itself to a status code.

pub mod config;
pub mod reference;
pub mod store;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, reference::ReferenceError, store::StoreError,
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates every error that can occur in the application and provides automatic
/// conversion to HTTP responses. Variants use `#[from]` so `?` works across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Document store error.
    ///
    /// Delegates to `StoreError::into_response()` (503 when the store is unavailable,
    /// 500 otherwise).
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Database operation error from SeaORM, including undecodable stored documents.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body violates an entity schema.
    ///
    /// Results in 422 Unprocessable Entity naming the field.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// A referenced document id is malformed or points to nothing.
    ///
    /// Results in 400 Bad Request or 404 Not Found.
    #[error(transparent)]
    ReferenceErr(#[from] ReferenceError),

    /// Request body is not a JSON document.
    ///
    /// Malformed JSON results in 400 Bad Request and a wrong content type in 415.
    /// Schema violations of a well-formed document are `ValidationErr` instead.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Malformed JSON or malformed reference id
/// - 404 Not Found - Referenced document does not exist
/// - 415 Unsupported Media Type - Body is not declared as JSON
/// - 422 Unprocessable Entity - Schema violation
/// - 503 Service Unavailable - Store not initialized
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::StoreErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::ReferenceErr(err) => err.into_response(),
            Self::JsonRejection(rejection) => (
                rejection.status(),
                Json(ErrorDto {
                    error: rejection.body_text(),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::document::DocumentKind;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (
                AppError::from(ValidationError::negative("budget")),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                AppError::from(ReferenceError::InvalidId { field: "player_id" }),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(ReferenceError::NotFound {
                    kind: DocumentKind::Player,
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::from(StoreError::Unavailable),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::from(sea_orm::DbErr::Custom("boom".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn names_the_missing_reference() {
        let err = ReferenceError::NotFound {
            kind: DocumentKind::TransferListing,
        };
        assert_eq!(err.to_string(), "Listing not found");

        let err = ReferenceError::InvalidId {
            field: "from_club_id",
        };
        assert_eq!(err.to_string(), "Invalid from_club_id");
    }
}
