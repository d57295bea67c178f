use crate::server::{
    data::store::Store,
    error::AppError,
    model::{
        club::{Club, CreateClubParams},
        object_id::ObjectId,
    },
};

pub struct ClubService<'a> {
    store: &'a Store,
}

impl<'a> ClubService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn create(&self, params: CreateClubParams) -> Result<ObjectId, AppError> {
        Ok(self.store.create(params).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Club>, AppError> {
        let clubs = self.store.list::<entity::club::Entity>().await?;

        clubs
            .into_iter()
            .map(Club::from_entity)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}
