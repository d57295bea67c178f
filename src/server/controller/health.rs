use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{api::MessageDto, diagnostic::DiagnosticDto},
    server::{service::diagnostic::DiagnosticService, state::AppState},
};

/// Tag for grouping health endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

const ROOT_MESSAGE: &str = "Calciomercato Social Backend Running";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Backend is running", body = MessageDto)
    ),
)]
pub async fn root() -> impl IntoResponse {
    Json(MessageDto {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// Report document store connectivity.
///
/// Always answers 200. Connection problems are described in the body rather than
/// returned as errors, so the endpoint stays useful while the store is down.
///
/// # Returns
/// - `200 OK` - Diagnostic report
#[utoipa::path(
    get,
    path = "/test",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Store connectivity report", body = DiagnosticDto)
    ),
)]
pub async fn test_database(State(state): State<AppState>) -> impl IntoResponse {
    let status = DiagnosticService::new(&state.store).status().await;

    Json(status.into_dto(state.database_name.clone(), state.database_url_set))
}
