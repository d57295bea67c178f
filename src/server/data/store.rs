use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, Statement,
};

use crate::server::{
    error::store::StoreError,
    model::{document::DocumentKind, object_id::ObjectId},
};

/// Lists user tables; the migration bookkeeping table is not a collection.
const COLLECTION_NAMES_SQL: &str = "SELECT name FROM sqlite_master \
    WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != 'seaql_migrations' \
    ORDER BY name";

/// An entity stored as a document collection.
pub trait Document: EntityTrait {
    const KIND: DocumentKind;
}

impl Document for entity::player::Entity {
    const KIND: DocumentKind = DocumentKind::Player;
}

impl Document for entity::club::Entity {
    const KIND: DocumentKind = DocumentKind::Club;
}

impl Document for entity::transfer_listing::Entity {
    const KIND: DocumentKind = DocumentKind::TransferListing;
}

impl Document for entity::transfer_offer::Entity {
    const KIND: DocumentKind = DocumentKind::TransferOffer;
}

/// Validated parameters that can be written as a new document.
pub trait IntoDocument {
    type Entity: Document;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send;

    /// Builds the row to insert under the store-assigned `id`.
    fn into_active_model(self, id: &ObjectId) -> Self::ActiveModel;
}

#[derive(FromQueryResult)]
struct CollectionName {
    name: String,
}

/// Document store adapter.
///
/// Holds `None` when no database was configured or the connection failed at startup. In
/// that state every operation fails with `StoreError::Unavailable` instead of panicking.
#[derive(Clone, Debug)]
pub struct Store {
    db: Option<DatabaseConnection>,
}

impl Store {
    pub fn connected(db: DatabaseConnection) -> Self {
        Self { db: Some(db) }
    }

    pub fn unavailable() -> Self {
        Self { db: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.db.is_some()
    }

    /// Returns the live connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The store was initialized
    /// - `Err(StoreError::Unavailable)` - No connection exists
    pub fn connection(&self) -> Result<&DatabaseConnection, StoreError> {
        self.db.as_ref().ok_or(StoreError::Unavailable)
    }

    /// Inserts a document and returns its newly assigned id.
    ///
    /// The insert is a single statement, so a failed write leaves nothing behind.
    ///
    /// # Returns
    /// - `Ok(ObjectId)` - Id of the inserted document
    /// - `Err(StoreError::Unavailable)` - Store not initialized
    /// - `Err(StoreError::Db)` - Insert failed
    pub async fn create<P>(&self, params: P) -> Result<ObjectId, StoreError>
    where
        P: IntoDocument,
        <P::Entity as EntityTrait>::Model: IntoActiveModel<P::ActiveModel>,
    {
        let db = self.connection()?;
        let id = ObjectId::generate();

        <P::Entity as EntityTrait>::insert(params.into_active_model(&id))
            .exec_without_returning(db)
            .await?;

        tracing::debug!(
            collection = P::Entity::KIND.collection(),
            id = %id,
            "Inserted document"
        );

        Ok(id)
    }

    /// Returns every document of a collection in the store's natural order.
    ///
    /// Rows keep their storage `_id`; flattening happens when models become DTOs.
    pub async fn list<E: Document>(&self) -> Result<Vec<E::Model>, StoreError> {
        let db = self.connection()?;

        Ok(E::find().all(db).await?)
    }

    /// Returns whether a document of `kind` with the given id exists.
    pub async fn exists(&self, kind: DocumentKind, id: &ObjectId) -> Result<bool, StoreError> {
        let db = self.connection()?;

        let found = match kind {
            DocumentKind::Player => entity::prelude::Player::find_by_id(id.as_str())
                .one(db)
                .await?
                .is_some(),
            DocumentKind::Club => entity::prelude::Club::find_by_id(id.as_str())
                .one(db)
                .await?
                .is_some(),
            DocumentKind::TransferListing => {
                entity::prelude::TransferListing::find_by_id(id.as_str())
                    .one(db)
                    .await?
                    .is_some()
            }
            DocumentKind::TransferOffer => entity::prelude::TransferOffer::find_by_id(id.as_str())
                .one(db)
                .await?
                .is_some(),
        };

        Ok(found)
    }

    /// Enumerates the collections present in the store, sorted by name.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let db = self.connection()?;

        let names = CollectionName::find_by_statement(Statement::from_string(
            db.get_database_backend(),
            COLLECTION_NAMES_SQL,
        ))
        .all(db)
        .await?;

        Ok(names.into_iter().map(|row| row.name).collect())
    }
}
