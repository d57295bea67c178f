//! Transfer offer factory for creating test offer documents.

use crate::factory::helpers::next_document_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transfer offers.
pub struct TransferOfferFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    listing_id: String,
    club_id: String,
    offer_amount: f64,
    status: String,
    message: Option<String>,
}

impl<'a> TransferOfferFactory<'a> {
    /// Creates a new TransferOfferFactory for the given listing and bidding club.
    ///
    /// Defaults:
    /// - id: unique 24 character hex id
    /// - offer_amount: `900_000.0`
    /// - status: `"pending"`
    /// - message: `None`
    pub fn new(db: &'a DatabaseConnection, listing_id: &str, club_id: &str) -> Self {
        Self {
            db,
            id: next_document_id(),
            listing_id: listing_id.to_string(),
            club_id: club_id.to_string(),
            offer_amount: 900_000.0,
            status: "pending".to_string(),
            message: None,
        }
    }

    pub fn offer_amount(mut self, offer_amount: f64) -> Self {
        self.offer_amount = offer_amount;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }

    /// Builds and inserts the offer entity into the database.
    pub async fn build(self) -> Result<entity::transfer_offer::Model, DbErr> {
        entity::transfer_offer::ActiveModel {
            id: ActiveValue::Set(self.id),
            listing_id: ActiveValue::Set(self.listing_id),
            club_id: ActiveValue::Set(self.club_id),
            offer_amount: ActiveValue::Set(self.offer_amount),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set(self.message),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending offer on the listing with default values.
pub async fn create_offer(
    db: &DatabaseConnection,
    listing_id: &str,
    club_id: &str,
) -> Result<entity::transfer_offer::Model, DbErr> {
    TransferOfferFactory::new(db, listing_id, club_id)
        .build()
        .await
}
