use crate::server::{
    data::store::Store,
    error::AppError,
    model::{
        object_id::ObjectId,
        player::{CreatePlayerParams, Player},
    },
};

pub struct PlayerService<'a> {
    store: &'a Store,
}

impl<'a> PlayerService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Stores a new player. `current_club_id` is kept as given and never looked up.
    pub async fn create(&self, params: CreatePlayerParams) -> Result<ObjectId, AppError> {
        Ok(self.store.create(params).await?)
    }

    /// Gets all players in the store's natural order
    pub async fn get_all(&self) -> Result<Vec<Player>, AppError> {
        let players = self.store.list::<entity::player::Entity>().await?;

        players
            .into_iter()
            .map(Player::from_entity)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
