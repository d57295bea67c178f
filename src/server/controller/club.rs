use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, IdDto, ValidationErrorDto},
        club::{ClubDto, CreateClubDto},
    },
    server::{
        error::AppError,
        model::club::{Club, CreateClubParams},
        service::club::ClubService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping club endpoints in OpenAPI documentation
pub static CLUB_TAG: &str = "club";

/// Create a club.
///
/// An omitted budget defaults to 0; a negative one is rejected.
///
/// # Returns
/// - `200 OK` - Id of the new club
/// - `422 Unprocessable Entity` - Body violates the club schema
/// - `503 Service Unavailable` - Store not initialized
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/clubs",
    tag = CLUB_TAG,
    request_body = CreateClubDto,
    responses(
        (status = 200, description = "Club created", body = IdDto),
        (status = 422, description = "Invalid club data", body = ValidationErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateClubDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateClubParams::from_dto(payload)?;

    let id = ClubService::new(&state.store).create(params).await?;

    Ok(Json(IdDto { id: id.into() }))
}

#[utoipa::path(
    get,
    path = "/clubs",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "All clubs", body = Vec<ClubDto>),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_clubs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.store).get_all().await?;

    let dtos: Vec<ClubDto> = clubs.into_iter().map(Club::into_dto).collect();

    Ok(Json(dtos))
}
