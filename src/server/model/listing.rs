//! Transfer listing domain models and parameters.

use sea_orm::{ActiveValue, DbErr};

use crate::{
    model::listing::{
        CreateTransferListingDto, ListingStatus, TransferListingDetailDto, TransferListingDto,
    },
    server::{
        data::store::IntoDocument,
        error::{reference::ReferenceError, AppError},
        model::{club::Club, object_id::ObjectId, player::Player},
        util::validate::check_non_negative,
    },
};

/// A stored transfer listing without its references resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferListing {
    pub id: ObjectId,
    pub player_id: String,
    pub from_club_id: Option<String>,
    pub asking_price: f64,
    pub status: ListingStatus,
}

impl TransferListing {
    /// Converts an entity model to a listing domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(TransferListing)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored id or status could not be decoded
    pub fn from_entity(entity: entity::transfer_listing::Model) -> Result<Self, DbErr> {
        let id = entity
            .id
            .parse::<ObjectId>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse listing id: {}", e)))?;
        let status = ListingStatus::parse(&entity.status).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown status '{}' on listing {}",
                entity.status, id
            ))
        })?;

        Ok(Self {
            id,
            player_id: entity.player_id,
            from_club_id: entity.from_club_id,
            asking_price: entity.asking_price,
            status,
        })
    }

    pub fn into_dto(self) -> TransferListingDto {
        TransferListingDto {
            id: self.id.into(),
            player_id: self.player_id,
            from_club_id: self.from_club_id,
            asking_price: self.asking_price,
            status: self.status,
        }
    }
}

/// Raw result of the listing join: a listing and whatever its references matched.
#[derive(Debug, Clone)]
pub struct TransferListingWithRelations {
    pub listing: entity::transfer_listing::Model,
    /// `None` when the listed player no longer exists.
    pub player: Option<entity::player::Model>,
    /// `None` when the listing has no `from_club_id` or the club does not exist.
    pub from_club: Option<entity::club::Model>,
}

/// A listing with its player and optional source club resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferListingDetail {
    pub listing: TransferListing,
    pub player: Player,
    pub from_club: Option<Club>,
}

impl TransferListingDetail {
    /// Builds the composite view from a join row whose player was matched.
    ///
    /// # Returns
    /// - `Ok(Some(TransferListingDetail))` - Player present, documents decoded
    /// - `Ok(None)` - The listed player is missing; callers drop the row
    /// - `Err(DbErr::Custom)` - A stored document could not be decoded
    pub fn from_with_relations(
        relations: TransferListingWithRelations,
    ) -> Result<Option<Self>, DbErr> {
        let Some(player) = relations.player else {
            return Ok(None);
        };

        Ok(Some(Self {
            listing: TransferListing::from_entity(relations.listing)?,
            player: Player::from_entity(player)?,
            from_club: relations.from_club.map(Club::from_entity).transpose()?,
        }))
    }

    pub fn into_dto(self) -> TransferListingDetailDto {
        let listing = self.listing;

        TransferListingDetailDto {
            id: listing.id.into(),
            player_id: listing.player_id,
            from_club_id: listing.from_club_id,
            asking_price: listing.asking_price,
            status: listing.status,
            player: self.player.into_dto(),
            from_club: self.from_club.map(Club::into_dto),
        }
    }
}

/// Validated parameters for creating a listing.
///
/// Reference ids are already known to be well-formed; their existence is checked by
/// the service before the write.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTransferListingParams {
    pub player_id: ObjectId,
    pub from_club_id: Option<ObjectId>,
    pub asking_price: f64,
    pub status: ListingStatus,
}

impl CreateTransferListingParams {
    /// Validates the request body, then the format of every supplied reference id.
    ///
    /// # Returns
    /// - `Ok(CreateTransferListingParams)` - Body and id formats are valid
    /// - `Err(AppError::ValidationErr)` - Negative asking price
    /// - `Err(AppError::ReferenceErr)` - `player_id` or `from_club_id` is malformed
    pub fn from_dto(dto: CreateTransferListingDto) -> Result<Self, AppError> {
        check_non_negative("asking_price", dto.asking_price)?;

        let player_id = dto
            .player_id
            .parse::<ObjectId>()
            .map_err(|_| ReferenceError::InvalidId { field: "player_id" })?;
        let from_club_id = dto
            .from_club_id
            .map(|id| id.parse::<ObjectId>())
            .transpose()
            .map_err(|_| ReferenceError::InvalidId {
                field: "from_club_id",
            })?;

        Ok(Self {
            player_id,
            from_club_id,
            asking_price: dto.asking_price,
            status: dto.status,
        })
    }
}

impl IntoDocument for CreateTransferListingParams {
    type Entity = entity::transfer_listing::Entity;
    type ActiveModel = entity::transfer_listing::ActiveModel;

    fn into_active_model(self, id: &ObjectId) -> Self::ActiveModel {
        entity::transfer_listing::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            player_id: ActiveValue::Set(self.player_id.into()),
            from_club_id: ActiveValue::Set(self.from_club_id.map(String::from)),
            asking_price: ActiveValue::Set(self.asking_price),
            status: ActiveValue::Set(self.status.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::error::validation::ValidationError;

    const PLAYER_ID: &str = "65a1f0c2e4b0a1b2c3d4e5f6";

    fn dto() -> CreateTransferListingDto {
        CreateTransferListingDto {
            player_id: PLAYER_ID.to_string(),
            from_club_id: None,
            asking_price: 1000.0,
            status: ListingStatus::default(),
        }
    }

    #[test]
    fn parses_reference_ids() {
        let params = CreateTransferListingParams::from_dto(dto()).unwrap();

        assert_eq!(params.player_id.as_str(), PLAYER_ID);
        assert_eq!(params.from_club_id, None);
        assert_eq!(params.status, ListingStatus::Open);
    }

    #[test]
    fn rejects_malformed_player_id() {
        let err = CreateTransferListingParams::from_dto(CreateTransferListingDto {
            player_id: "not-an-id".to_string(),
            ..dto()
        })
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::ReferenceErr(ReferenceError::InvalidId { field: "player_id" })
        ));
    }

    #[test]
    fn rejects_malformed_from_club_id() {
        let err = CreateTransferListingParams::from_dto(CreateTransferListingDto {
            from_club_id: Some("123".to_string()),
            ..dto()
        })
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::ReferenceErr(ReferenceError::InvalidId {
                field: "from_club_id"
            })
        ));
    }

    #[test]
    fn rejects_negative_asking_price_before_ids() {
        let err = CreateTransferListingParams::from_dto(CreateTransferListingDto {
            player_id: "bad".to_string(),
            asking_price: -5.0,
            ..dto()
        })
        .unwrap_err();

        assert!(matches!(
            err,
            AppError::ValidationErr(ValidationError { ref field, .. }) if field == "asking_price"
        ));
    }

    #[test]
    fn drops_rows_without_player() {
        let relations = TransferListingWithRelations {
            listing: entity::transfer_listing::Model {
                id: "65a1f0c2e4b0a1b2c3d4e5f7".to_string(),
                player_id: PLAYER_ID.to_string(),
                from_club_id: None,
                asking_price: 10.0,
                status: "open".to_string(),
            },
            player: None,
            from_club: None,
        };

        let detail = TransferListingDetail::from_with_relations(relations).unwrap();
        assert!(detail.is_none());
    }
}
