//! Data access layer.
//!
//! `Store` is the document store adapter: it owns the optional connection, assigns ids
//! on insert and lists whole collections. `JoinRepository` runs the composite reads that
//! resolve references through the database engine.

pub mod join;
pub mod store;

#[cfg(test)]
mod test;
