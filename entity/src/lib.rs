//! SeaORM entities, one per document collection.
//!
//! Every entity uses a text primary key stored in the `_id` column, holding the
//! store-assigned 24 character hex identifier. References between collections are
//! plain text columns: no foreign keys are declared, so the store never enforces
//! referential integrity on its own.

pub mod prelude;

pub mod club;
pub mod player;
pub mod transfer_listing;
pub mod transfer_offer;
