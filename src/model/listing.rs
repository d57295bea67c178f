use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{club::ClubDto, player::PlayerDto};

/// Lifecycle state of a transfer listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    #[default]
    Open,
    UnderReview,
    Closed,
}

impl ListingStatus {
    /// Returns the stored representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::UnderReview => "under_review",
            Self::Closed => "closed",
        }
    }

    /// Parses the stored representation back into a status.
    ///
    /// # Returns
    /// - `Some(ListingStatus)` - The value names a known status
    /// - `None` - The value is not one of `open`, `under_review` or `closed`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(Self::Open),
            "under_review" => Some(Self::UnderReview),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Request body for `POST /listings`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTransferListingDto {
    /// Id of the player being listed.
    pub player_id: String,
    /// Id of the club currently owning the player.
    pub from_club_id: Option<String>,
    /// Asking price in EUR, not negative.
    pub asking_price: f64,
    #[serde(default)]
    pub status: ListingStatus,
}

/// A listing document on its own, as nested inside offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferListingDto {
    pub id: String,
    pub player_id: String,
    pub from_club_id: Option<String>,
    pub asking_price: f64,
    pub status: ListingStatus,
}

/// A listing with its player and, when known, the club it is listed from.
///
/// `from_club` is omitted entirely, rather than set to null, when the listing has
/// no `from_club_id` or the club cannot be found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferListingDetailDto {
    pub id: String,
    pub player_id: String,
    pub from_club_id: Option<String>,
    pub asking_price: f64,
    pub status: ListingStatus,
    pub player: PlayerDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_club: Option<ClubDto>,
}
