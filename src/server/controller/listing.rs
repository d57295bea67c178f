use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, IdDto, ValidationErrorDto},
        listing::{CreateTransferListingDto, TransferListingDetailDto},
    },
    server::{
        error::AppError,
        model::listing::{CreateTransferListingParams, TransferListingDetail},
        service::listing::TransferListingService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static LISTING_TAG: &str = "listing";

/// Put a player on the transfer market.
///
/// Reference ids are checked for format first, then for existence: the player, then
/// the source club when one is given. Nothing is stored unless every check passes.
///
/// # Returns
/// - `200 OK` - Id of the new listing
/// - `400 Bad Request` - `player_id` or `from_club_id` is not a valid id
/// - `404 Not Found` - Referenced player or club does not exist
/// - `422 Unprocessable Entity` - Body violates the listing schema
/// - `503 Service Unavailable` - Store not initialized
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/listings",
    tag = LISTING_TAG,
    request_body = CreateTransferListingDto,
    responses(
        (status = 200, description = "Listing created", body = IdDto),
        (status = 400, description = "Invalid reference id", body = ErrorDto),
        (status = 404, description = "Player or club not found", body = ErrorDto),
        (status = 422, description = "Invalid listing data", body = ValidationErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTransferListingDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTransferListingParams::from_dto(payload)?;

    let id = TransferListingService::new(&state.store)
        .create(params)
        .await?;

    Ok(Json(IdDto { id: id.into() }))
}

/// List all listings with their player and, when known, the source club.
///
/// `from_club` is omitted from an item when the listing has no source club or the club
/// cannot be found.
#[utoipa::path(
    get,
    path = "/listings",
    tag = LISTING_TAG,
    responses(
        (status = 200, description = "All listings", body = Vec<TransferListingDetailDto>),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listings(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let listings = TransferListingService::new(&state.store).get_all().await?;

    let dtos: Vec<TransferListingDetailDto> = listings
        .into_iter()
        .map(TransferListingDetail::into_dto)
        .collect();

    Ok(Json(dtos))
}
