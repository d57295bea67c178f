use crate::server::{
    data::store::Store,
    error::{reference::ReferenceError, AppError},
    model::{document::DocumentKind, object_id::ObjectId},
};

/// Checks that referenced documents exist before a dependent document is written.
///
/// Ids reaching the validator are already well-formed, so each check costs exactly one
/// store lookup.
pub struct ReferenceValidator<'a> {
    store: &'a Store,
}

impl<'a> ReferenceValidator<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Requires a document of `kind` with `id` to exist.
    ///
    /// # Returns
    /// - `Ok(())` - The document exists
    /// - `Err(AppError::ReferenceErr)` - No such document; maps to 404 naming `kind`
    /// - `Err(AppError::StoreErr)` - Store unavailable or lookup failed
    pub async fn require(&self, kind: DocumentKind, id: &ObjectId) -> Result<(), AppError> {
        if !self.store.exists(kind, id).await? {
            tracing::debug!(kind = %kind, id = %id, "Referenced document not found");

            return Err(ReferenceError::NotFound { kind }.into());
        }

        Ok(())
    }
}
