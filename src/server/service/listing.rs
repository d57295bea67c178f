use crate::server::{
    data::{join::JoinRepository, store::Store},
    error::AppError,
    model::{
        document::DocumentKind,
        listing::{CreateTransferListingParams, TransferListingDetail},
        object_id::ObjectId,
    },
    service::reference::ReferenceValidator,
};

pub struct TransferListingService<'a> {
    store: &'a Store,
}

impl<'a> TransferListingService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates a listing once its player and, when given, its source club exist.
    ///
    /// The player is checked first, so a request missing both reports the player.
    /// Nothing is written when a check fails.
    pub async fn create(&self, params: CreateTransferListingParams) -> Result<ObjectId, AppError> {
        let validator = ReferenceValidator::new(self.store);

        validator
            .require(DocumentKind::Player, &params.player_id)
            .await?;
        if let Some(from_club_id) = &params.from_club_id {
            validator.require(DocumentKind::Club, from_club_id).await?;
        }

        Ok(self.store.create(params).await?)
    }

    /// Gets all listings with their player and optional source club.
    ///
    /// Listings whose player no longer exists are left out and logged.
    pub async fn get_all(&self) -> Result<Vec<TransferListingDetail>, AppError> {
        let db = self.store.connection()?;
        let rows = JoinRepository::new(db).listings_with_relations().await?;

        let mut listings = Vec::with_capacity(rows.len());
        for row in rows {
            let listing_id = row.listing.id.clone();
            let player_id = row.listing.player_id.clone();

            match TransferListingDetail::from_with_relations(row)? {
                Some(listing) => listings.push(listing),
                None => tracing::warn!(
                    listing_id = %listing_id,
                    player_id = %player_id,
                    "Skipping listing that references a missing player"
                ),
            }
        }

        Ok(listings)
    }
}
