//! API data transfer objects.
//!
//! Request and response bodies exchanged with clients. Identifiers are always
//! plain strings under `id`; the store's own `_id` column never appears here.

pub mod api;
pub mod club;
pub mod diagnostic;
pub mod listing;
pub mod offer;
pub mod player;
