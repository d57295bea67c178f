//! Calciomercato Test Utils
//!
//! Provides shared testing utilities for the calciomercato backend. This crate offers a
//! builder for creating test contexts backed by in-memory SQLite databases with the
//! document collection tables, plus factories for inserting documents directly.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting players, clubs, listings and offers
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_players() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_document_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let player = factory::create_player(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
