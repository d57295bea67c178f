use crate::server::{data::store::Store, model::diagnostic::StoreStatus};

pub struct DiagnosticService<'a> {
    store: &'a Store,
}

impl<'a> DiagnosticService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Probes the store by enumerating its collections.
    ///
    /// Never fails: an unreachable or erroring store is reported as a status.
    pub async fn status(&self) -> StoreStatus {
        if !self.store.is_initialized() {
            return StoreStatus::NotInitialized;
        }

        match self.store.collection_names().await {
            Ok(collections) => StoreStatus::Connected { collections },
            Err(e) => {
                tracing::warn!("Failed to enumerate collections: {}", e);

                StoreStatus::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }
}
