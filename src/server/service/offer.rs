use crate::server::{
    data::{join::JoinRepository, store::Store},
    error::AppError,
    model::{
        document::DocumentKind,
        object_id::ObjectId,
        offer::{CreateTransferOfferParams, TransferOfferDetail},
    },
    service::reference::ReferenceValidator,
};

pub struct TransferOfferService<'a> {
    store: &'a Store,
}

impl<'a> TransferOfferService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Creates an offer once its listing and bidding club exist, listing first.
    pub async fn create(&self, params: CreateTransferOfferParams) -> Result<ObjectId, AppError> {
        let validator = ReferenceValidator::new(self.store);

        validator
            .require(DocumentKind::TransferListing, &params.listing_id)
            .await?;
        validator
            .require(DocumentKind::Club, &params.club_id)
            .await?;

        Ok(self.store.create(params).await?)
    }

    /// Gets all offers with their listing and club.
    ///
    /// Offers whose listing or club no longer exists are left out and logged.
    pub async fn get_all(&self) -> Result<Vec<TransferOfferDetail>, AppError> {
        let db = self.store.connection()?;
        let rows = JoinRepository::new(db).offers_with_relations().await?;

        let mut offers = Vec::with_capacity(rows.len());
        for row in rows {
            let offer_id = row.offer.id.clone();
            let missing = match (&row.listing, &row.club) {
                (None, _) => format!("listing {}", row.offer.listing_id),
                (_, None) => format!("club {}", row.offer.club_id),
                _ => String::new(),
            };

            match TransferOfferDetail::from_with_relations(row)? {
                Some(offer) => offers.push(offer),
                None => tracing::warn!(
                    offer_id = %offer_id,
                    missing = %missing,
                    "Skipping offer that references a missing document"
                ),
            }
        }

        Ok(offers)
    }
}
