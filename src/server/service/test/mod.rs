use crate::{
    model::{
        listing::{CreateTransferListingDto, ListingStatus},
        offer::{CreateTransferOfferDto, OfferStatus},
    },
    server::{
        data::store::Store,
        error::{reference::ReferenceError, store::StoreError, AppError},
        model::{
            document::DocumentKind, listing::CreateTransferListingParams,
            offer::CreateTransferOfferParams,
        },
        service::{listing::TransferListingService, offer::TransferOfferService},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::helpers::next_document_id};

mod offer;
mod player;

fn listing_params(player_id: &str, from_club_id: Option<String>) -> CreateTransferListingParams {
    CreateTransferListingParams::from_dto(CreateTransferListingDto {
        player_id: player_id.to_string(),
        from_club_id,
        asking_price: 1000.0,
        status: ListingStatus::Open,
    })
    .unwrap()
}

fn offer_params(listing_id: &str, club_id: &str) -> CreateTransferOfferParams {
    CreateTransferOfferParams::from_dto(CreateTransferOfferDto {
        listing_id: listing_id.to_string(),
        club_id: club_id.to_string(),
        offer_amount: 750.0,
        status: OfferStatus::Pending,
        message: Some("Serious bid".to_string()),
    })
    .unwrap()
}
