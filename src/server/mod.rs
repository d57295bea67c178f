//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite as the document
//! store. Every document lives in its own collection under a store-assigned `_id`;
//! references between documents are plain ids checked when a document is created.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Reference checks and composite read assembly
//! - **Data Layer** (`data/`) - Document store adapter and engine-side joins
//! - **Model Layer** (`model/`) - Domain models, ids and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing setup and database connection
//! - **Router** (`router`) - Route table, CORS, request tracing and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Controller** deserializes the body and validates it into parameters
//! 3. **Service** checks references, then writes or reads through the data layer
//! 4. **Data** queries the database and returns entity models
//! 5. **Controller** converts domain models to DTOs with flattened ids

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
