//! Transfer offer domain models and parameters.

use sea_orm::{ActiveValue, DbErr};

use crate::{
    model::offer::{CreateTransferOfferDto, OfferStatus, TransferOfferDetailDto},
    server::{
        data::store::IntoDocument,
        error::{reference::ReferenceError, AppError},
        model::{club::Club, listing::TransferListing, object_id::ObjectId},
        util::validate::check_non_negative,
    },
};

/// A stored transfer offer without its references resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOffer {
    pub id: ObjectId,
    pub listing_id: String,
    pub club_id: String,
    pub offer_amount: f64,
    pub status: OfferStatus,
    pub message: Option<String>,
}

impl TransferOffer {
    /// Converts an entity model to an offer domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TransferOffer)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored id or status could not be decoded
    pub fn from_entity(entity: entity::transfer_offer::Model) -> Result<Self, DbErr> {
        let id = entity
            .id
            .parse::<ObjectId>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse offer id: {}", e)))?;
        let status = OfferStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!("Unknown status '{}' on offer {}", entity.status, id))
        })?;

        Ok(Self {
            id,
            listing_id: entity.listing_id,
            club_id: entity.club_id,
            offer_amount: entity.offer_amount,
            status,
            message: entity.message,
        })
    }
}

/// Raw result of the offer join.
#[derive(Debug, Clone)]
pub struct TransferOfferWithRelations {
    pub offer: entity::transfer_offer::Model,
    pub listing: Option<entity::transfer_listing::Model>,
    pub club: Option<entity::club::Model>,
}

/// An offer with the listing it targets and the bidding club resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOfferDetail {
    pub offer: TransferOffer,
    pub listing: TransferListing,
    pub club: Club,
}

impl TransferOfferDetail {
    /// Builds the composite view from a join row.
    ///
    /// # Returns
    /// - `Ok(Some(TransferOfferDetail))` - Listing and club present, documents decoded
    /// - `Ok(None)` - The listing or the club is missing; callers drop the row
    /// - `Err(DbErr::Custom)` - A stored document could not be decoded
    pub fn from_with_relations(
        relations: TransferOfferWithRelations,
    ) -> Result<Option<Self>, DbErr> {
        let (Some(listing), Some(club)) = (relations.listing, relations.club) else {
            return Ok(None);
        };

        Ok(Some(Self {
            offer: TransferOffer::from_entity(relations.offer)?,
            listing: TransferListing::from_entity(listing)?,
            club: Club::from_entity(club)?,
        }))
    }

    pub fn into_dto(self) -> TransferOfferDetailDto {
        let offer = self.offer;

        TransferOfferDetailDto {
            id: offer.id.into(),
            listing_id: offer.listing_id,
            club_id: offer.club_id,
            offer_amount: offer.offer_amount,
            status: offer.status,
            message: offer.message,
            listing: self.listing.into_dto(),
            club: self.club.into_dto(),
        }
    }
}

/// Validated parameters for creating an offer.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransferOfferParams {
    pub listing_id: ObjectId,
    pub club_id: ObjectId,
    pub offer_amount: f64,
    pub status: OfferStatus,
    pub message: Option<String>,
}

impl CreateTransferOfferParams {
    /// Validates the request body, then the format of both reference ids.
    ///
    /// # Returns
    /// - `Ok(CreateTransferOfferParams)` - Body and id formats are valid
    /// - `Err(AppError::ValidationErr)` - Negative offer amount
    /// - `Err(AppError::ReferenceErr)` - `listing_id` or `club_id` is malformed
    pub fn from_dto(dto: CreateTransferOfferDto) -> Result<Self, AppError> {
        check_non_negative("offer_amount", dto.offer_amount)?;

        let listing_id = dto
            .listing_id
            .parse::<ObjectId>()
            .map_err(|_| ReferenceError::InvalidId {
                field: "listing_id",
            })?;
        let club_id = dto
            .club_id
            .parse::<ObjectId>()
            .map_err(|_| ReferenceError::InvalidId { field: "club_id" })?;

        Ok(Self {
            listing_id,
            club_id,
            offer_amount: dto.offer_amount,
            status: dto.status,
            message: dto.message,
        })
    }
}

impl IntoDocument for CreateTransferOfferParams {
    type Entity = entity::transfer_offer::Entity;
    type ActiveModel = entity::transfer_offer::ActiveModel;

    fn into_active_model(self, id: &ObjectId) -> Self::ActiveModel {
        entity::transfer_offer::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            listing_id: ActiveValue::Set(self.listing_id.into()),
            club_id: ActiveValue::Set(self.club_id.into()),
            offer_amount: ActiveValue::Set(self.offer_amount),
            status: ActiveValue::Set(self.status.as_str().to_string()),
            message: ActiveValue::Set(self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreateTransferOfferDto {
        CreateTransferOfferDto {
            listing_id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            club_id: "65a1f0c2e4b0a1b2c3d4e5f7".to_string(),
            offer_amount: 500.0,
            status: OfferStatus::default(),
            message: None,
        }
    }

    #[test]
    fn defaults_status_to_pending() {
        let params = CreateTransferOfferParams::from_dto(dto()).unwrap();
        assert_eq!(params.status, OfferStatus::Pending);
    }

    #[test]
    fn names_the_malformed_field() {
        let err = CreateTransferOfferParams::from_dto(CreateTransferOfferDto {
            club_id: "zzz".to_string(),
            ..dto()
        })
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::ReferenceErr(ReferenceError::InvalidId { field: "club_id" })
        ));
    }

    #[test]
    fn rejects_negative_offer_amount() {
        let err = CreateTransferOfferParams::from_dto(CreateTransferOfferDto {
            offer_amount: -0.5,
            ..dto()
        })
        .unwrap_err();

        assert!(matches!(err, AppError::ValidationErr(_)));
    }
}
