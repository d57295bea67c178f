use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, IdDto, ValidationErrorDto},
        offer::{CreateTransferOfferDto, TransferOfferDetailDto},
    },
    server::{
        error::AppError,
        model::offer::{CreateTransferOfferParams, TransferOfferDetail},
        service::offer::TransferOfferService,
        state::AppState,
        util::json::JsonBody,
    },
};

/// Tag for grouping offer endpoints in OpenAPI documentation
pub static OFFER_TAG: &str = "offer";

/// Make an offer on a listing.
///
/// # Returns
/// - `200 OK` - Id of the new offer
/// - `400 Bad Request` - `listing_id` or `club_id` is not a valid id
/// - `404 Not Found` - Referenced listing or club does not exist
/// - `422 Unprocessable Entity` - Body violates the offer schema
/// - `503 Service Unavailable` - Store not initialized
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/offers",
    tag = OFFER_TAG,
    request_body = CreateTransferOfferDto,
    responses(
        (status = 200, description = "Offer created", body = IdDto),
        (status = 400, description = "Invalid reference id", body = ErrorDto),
        (status = 404, description = "Listing or club not found", body = ErrorDto),
        (status = 422, description = "Invalid offer data", body = ValidationErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_offer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTransferOfferDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateTransferOfferParams::from_dto(payload)?;

    let id = TransferOfferService::new(&state.store)
        .create(params)
        .await?;

    Ok(Json(IdDto { id: id.into() }))
}

/// List all offers with the listing they target and the club that made them.
#[utoipa::path(
    get,
    path = "/offers",
    tag = OFFER_TAG,
    responses(
        (status = 200, description = "All offers", body = Vec<TransferOfferDetailDto>),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_offers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let offers = TransferOfferService::new(&state.store).get_all().await?;

    let dtos: Vec<TransferOfferDetailDto> = offers
        .into_iter()
        .map(TransferOfferDetail::into_dto)
        .collect();

    Ok(Json(dtos))
}
