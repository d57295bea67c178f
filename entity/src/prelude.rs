pub use super::club::Entity as Club;
pub use super::player::Entity as Player;
pub use super::transfer_listing::Entity as TransferListing;
pub use super::transfer_offer::Entity as TransferOffer;
