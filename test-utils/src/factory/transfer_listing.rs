//! Transfer listing factory for creating test listing documents.
//!
//! The referenced player (and club) ids are stored as given; nothing checks that they
//! exist, which lets tests create orphaned listings on purpose.

use crate::factory::helpers::next_document_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test transfer listings.
pub struct TransferListingFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    player_id: String,
    from_club_id: Option<String>,
    asking_price: f64,
    status: String,
}

impl<'a> TransferListingFactory<'a> {
    /// Creates a new TransferListingFactory for the given player.
    ///
    /// Defaults:
    /// - id: unique 24 character hex id
    /// - from_club_id: `None`
    /// - asking_price: `1_000_000.0`
    /// - status: `"open"`
    pub fn new(db: &'a DatabaseConnection, player_id: &str) -> Self {
        Self {
            db,
            id: next_document_id(),
            player_id: player_id.to_string(),
            from_club_id: None,
            asking_price: 1_000_000.0,
            status: "open".to_string(),
        }
    }

    pub fn from_club_id(mut self, from_club_id: Option<String>) -> Self {
        self.from_club_id = from_club_id;
        self
    }

    pub fn asking_price(mut self, asking_price: f64) -> Self {
        self.asking_price = asking_price;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the listing entity into the database.
    pub async fn build(self) -> Result<entity::transfer_listing::Model, DbErr> {
        entity::transfer_listing::ActiveModel {
            id: ActiveValue::Set(self.id),
            player_id: ActiveValue::Set(self.player_id),
            from_club_id: ActiveValue::Set(self.from_club_id),
            asking_price: ActiveValue::Set(self.asking_price),
            status: ActiveValue::Set(self.status),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open listing for the player with default values.
pub async fn create_listing(
    db: &DatabaseConnection,
    player_id: &str,
) -> Result<entity::transfer_listing::Model, DbErr> {
    TransferListingFactory::new(db, player_id).build().await
}
