//! Factory methods for creating test documents.
//!
//! Factories insert entities straight into the database with sensible defaults,
//! bypassing the application's validation. This makes it possible to set up states
//! the API itself would refuse to create, such as a listing whose player was never
//! stored.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let player = factory::create_player(&db).await?;
//! let club = factory::create_club(&db).await?;
//!
//! let (player, club, listing) =
//!     factory::helpers::create_listing_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let player = factory::player::PlayerFactory::new(&db)
//!     .name("Francesco Totti")
//!     .position("Forward")
//!     .age(Some(24))
//!     .build()
//!     .await?;
//! ```

pub mod club;
pub mod helpers;
pub mod player;
pub mod transfer_listing;
pub mod transfer_offer;

pub use club::create_club;
pub use player::create_player;
pub use transfer_listing::create_listing;
pub use transfer_offer::create_offer;
