use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{club::ClubDto, listing::TransferListingDto};

/// Decision state of a transfer offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl OfferStatus {
    /// Returns the stored representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parses the stored representation back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Request body for `POST /offers`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateTransferOfferDto {
    /// Id of the listing the offer is made on.
    pub listing_id: String,
    /// Id of the club making the offer.
    pub club_id: String,
    /// Offer amount in EUR, not negative.
    pub offer_amount: f64,
    #[serde(default)]
    pub status: OfferStatus,
    /// Optional message from the bidding club.
    pub message: Option<String>,
}

/// An offer with the listing it targets and the club that made it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransferOfferDetailDto {
    pub id: String,
    pub listing_id: String,
    pub club_id: String,
    pub offer_amount: f64,
    pub status: OfferStatus,
    pub message: Option<String>,
    pub listing: TransferListingDto,
    pub club: ClubDto,
}
