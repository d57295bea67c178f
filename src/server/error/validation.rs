use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ValidationErrorDto;

/// Structural violation of an entity schema, detected before any store access.
///
/// Results in 422 Unprocessable Entity naming the offending field.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Name of the request field that failed validation.
    pub field: String,
    /// Human readable description of the violated constraint.
    pub message: String,
}

impl ValidationError {
    /// Value lies outside an inclusive integer range.
    pub fn out_of_range(field: &str, min: i32, max: i32) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} must be between {} and {}", field, min, max),
        }
    }

    /// Body could not be deserialized into the request schema.
    ///
    /// `path` is the location of the failure as reported by the deserializer, `.` for
    /// the document root. A missing field fails at its parent, so its name is taken
    /// from the error itself. Failures at the root that name no field are reported
    /// against `body`.
    pub fn from_body(path: String, err: &serde_json::Error) -> Self {
        let message = err.to_string();
        let missing = message
            .strip_prefix("missing field `")
            .and_then(|rest| rest.split('`').next());

        let field = match (path.as_str(), missing) {
            (".", Some(name)) => name.to_string(),
            (".", None) => "body".to_string(),
            (parent, Some(name)) => format!("{}.{}", parent, name),
            (path, None) => path.to_string(),
        };

        Self { field, message }
    }

    /// Value must be zero or greater.
    pub fn negative(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: format!("{} must be greater than or equal to 0", field),
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ValidationErrorDto {
                error: self.message,
                field: self.field,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::player::CreatePlayerDto;

    fn deserialize_error(body: serde_json::Value) -> ValidationError {
        let err = serde_path_to_error::deserialize::<_, CreatePlayerDto>(body).unwrap_err();

        ValidationError::from_body(err.path().to_string(), err.inner())
    }

    #[test]
    fn names_missing_field() {
        let err = deserialize_error(serde_json::json!({"position": "Forward"}));

        assert_eq!(err.field, "name");
        assert!(err.message.contains("missing field `name`"));
    }

    #[test]
    fn names_field_with_wrong_type() {
        let err = deserialize_error(
            serde_json::json!({"name": "X", "position": "Forward", "age": "ten"}),
        );

        assert_eq!(err.field, "age");
    }

    #[test]
    fn names_nested_element() {
        let err = deserialize_error(
            serde_json::json!({"name": "X", "position": "Forward", "skills": ["pace", 3]}),
        );

        assert_eq!(err.field, "skills[1]");
    }

    #[test]
    fn reports_non_object_body() {
        let err = deserialize_error(serde_json::json!("player"));

        assert_eq!(err.field, "body");
    }
}
