use axum::{routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, IdDto, MessageDto, ValidationErrorDto},
        club::{ClubDto, CreateClubDto},
        diagnostic::DiagnosticDto,
        listing::{
            CreateTransferListingDto, ListingStatus, TransferListingDetailDto, TransferListingDto,
        },
        offer::{CreateTransferOfferDto, OfferStatus, TransferOfferDetailDto},
        player::{CreatePlayerDto, PlayerDto},
    },
    server::{
        controller::{
            club::{create_club, get_clubs},
            health::{root, test_database},
            listing::{create_listing, get_listings},
            offer::{create_offer, get_offers},
            player::{create_player, get_players},
        },
        state::AppState,
    },
};

pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calciomercato Social API",
        description = "Players, clubs, transfer listings and offers."
    ),
    paths(
        crate::server::controller::health::root,
        crate::server::controller::health::test_database,
        crate::server::controller::player::create_player,
        crate::server::controller::player::get_players,
        crate::server::controller::club::create_club,
        crate::server::controller::club::get_clubs,
        crate::server::controller::listing::create_listing,
        crate::server::controller::listing::get_listings,
        crate::server::controller::offer::create_offer,
        crate::server::controller::offer::get_offers,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        IdDto,
        MessageDto,
        DiagnosticDto,
        CreatePlayerDto,
        PlayerDto,
        CreateClubDto,
        ClubDto,
        ListingStatus,
        CreateTransferListingDto,
        TransferListingDto,
        TransferListingDetailDto,
        OfferStatus,
        CreateTransferOfferDto,
        TransferOfferDetailDto,
    ))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Any origin, method and header is allowed; the API carries no credentials.
pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/test", get(test_database))
        .route("/players", get(get_players).post(create_player))
        .route("/clubs", get(get_clubs).post(create_club))
        .route("/listings", get(get_listings).post(create_listing))
        .route("/offers", get(get_offers).post(create_offer))
        .route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
