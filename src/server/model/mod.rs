//! Domain models and operation parameters.
//!
//! Entity models are converted to these types at the repository boundary, and request
//! DTOs are validated into `*Params` before reaching a service. Every model flattens its
//! id into a plain string field when converted back to a DTO.

pub mod club;
pub mod diagnostic;
pub mod document;
pub mod listing;
pub mod object_id;
pub mod offer;
pub mod player;
