//! Business logic between controllers and the data layer.
//!
//! Services take validated parameters, check references against the store and return
//! domain models. Malformed input never reaches this layer; it is rejected while the
//! request DTO is converted to parameters.

pub mod club;
pub mod diagnostic;
pub mod listing;
pub mod offer;
pub mod player;
pub mod reference;

#[cfg(test)]
mod test;
