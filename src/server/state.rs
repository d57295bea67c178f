//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction.

use crate::server::{config::Config, data::store::Store};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `Store` wraps a connection pool whose clones share
/// the pool.
#[derive(Clone)]
pub struct AppState {
    /// Document store, possibly without a connection.
    pub store: Store,

    /// Configured database name, echoed by the diagnostic endpoint.
    pub database_name: Option<String>,

    /// Whether a database URL was configured at all.
    pub database_url_set: bool,
}

impl AppState {
    pub fn new(store: Store, config: &Config) -> Self {
        Self {
            store,
            database_name: config.database_name.clone(),
            database_url_set: config.database_url.is_some(),
        }
    }
}
