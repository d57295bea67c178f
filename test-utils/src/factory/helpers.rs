//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique, well-formed document id (24 lowercase hex characters).
///
/// # Returns
/// - `String` - Document id that no other factory call will return
pub fn next_document_id() -> String {
    format!("{:024x}", next_id())
}

/// Creates a listing together with the player and the club it is listed from.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((player, club, listing))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::player::Model,
        entity::club::Model,
        entity::transfer_listing::Model,
    ),
    DbErr,
> {
    let player = crate::factory::player::create_player(db).await?;
    let club = crate::factory::club::create_club(db).await?;
    let listing = crate::factory::transfer_listing::TransferListingFactory::new(db, &player.id)
        .from_club_id(Some(club.id.clone()))
        .build()
        .await?;

    Ok((player, club, listing))
}

/// Creates an offer together with its listing, the listed player and the bidding club.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((player, listing, club, offer))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_offer_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::player::Model,
        entity::transfer_listing::Model,
        entity::club::Model,
        entity::transfer_offer::Model,
    ),
    DbErr,
> {
    let player = crate::factory::player::create_player(db).await?;
    let listing = crate::factory::transfer_listing::create_listing(db, &player.id).await?;
    let club = crate::factory::club::create_club(db).await?;
    let offer = crate::factory::transfer_offer::create_offer(db, &listing.id, &club.id).await?;

    Ok((player, listing, club, offer))
}
