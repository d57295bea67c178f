use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::document::DocumentKind};

/// Rejections raised by the referential validator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReferenceError {
    /// The supplied id is not a well-formed document id.
    ///
    /// Raised before any existence lookup. Results in 400 Bad Request naming the field.
    #[error("Invalid {field}")]
    InvalidId {
        /// Name of the request field holding the malformed id.
        field: &'static str,
    },

    /// The id is well-formed but no document of the expected kind exists.
    ///
    /// Results in 404 Not Found naming the missing entity kind.
    #[error("{kind} not found")]
    NotFound {
        /// Kind of the referenced document.
        kind: DocumentKind,
    },
}

impl IntoResponse for ReferenceError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidId { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
