use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, IdDto, ValidationErrorDto},
        player::{CreatePlayerDto, PlayerDto},
    },
    server::{
        error::AppError,
        model::player::{CreatePlayerParams, Player},
        service::player::PlayerService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping player endpoints in OpenAPI documentation
pub static PLAYER_TAG: &str = "player";

/// Create a player.
///
/// Validates age (8 to 60), height (100 to 230 cm) and market value (not negative).
/// `current_club_id` is stored as given.
///
/// # Returns
/// - `200 OK` - Id of the new player
/// - `422 Unprocessable Entity` - Body violates the player schema
/// - `503 Service Unavailable` - Store not initialized
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 200, description = "Player created", body = IdDto),
        (status = 422, description = "Invalid player data", body = ValidationErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreatePlayerDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreatePlayerParams::from_dto(payload)?;

    let id = PlayerService::new(&state.store).create(params).await?;

    Ok(Json(IdDto { id: id.into() }))
}

/// List all players.
#[utoipa::path(
    get,
    path = "/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "All players", body = Vec<PlayerDto>),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_players(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let players = PlayerService::new(&state.store).get_all().await?;

    let dtos: Vec<PlayerDto> = players.into_iter().map(Player::into_dto).collect();

    Ok(Json(dtos))
}
