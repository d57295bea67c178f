//! HTTP request handlers.
//!
//! Controllers convert request DTOs into validated parameters, call a service and
//! convert the resulting domain models back into DTOs. Every handler is documented with
//! `#[utoipa::path]` and collected into the OpenAPI document by the router.

pub mod club;
pub mod health;
pub mod listing;
pub mod offer;
pub mod player;

#[cfg(test)]
mod test;
