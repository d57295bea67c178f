//! Club factory for creating test club documents.

use crate::factory::helpers::{next_document_id, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test clubs with customizable fields.
pub struct ClubFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    league: Option<String>,
    budget: f64,
}

impl<'a> ClubFactory<'a> {
    /// Creates a new ClubFactory with default values.
    ///
    /// Defaults:
    /// - id: unique 24 character hex id
    /// - name: `"Club {n}"`
    /// - league: `None`
    /// - budget: `0.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_document_id(),
            name: format!("Club {}", next_id()),
            league: None,
            budget: 0.0,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn league(mut self, league: Option<String>) -> Self {
        self.league = league;
        self
    }

    pub fn budget(mut self, budget: f64) -> Self {
        self.budget = budget;
        self
    }

    /// Builds and inserts the club entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::club::Model)` - Created club entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::club::Model, DbErr> {
        entity::club::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            league: ActiveValue::Set(self.league),
            country: ActiveValue::Set(None),
            budget: ActiveValue::Set(self.budget),
            stadium: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a club with default values.
pub async fn create_club(db: &DatabaseConnection) -> Result<entity::club::Model, DbErr> {
    ClubFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_club_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Club)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let club = ClubFactory::new(db)
            .name("Roma")
            .league(Some("Serie A".to_string()))
            .budget(1_500_000.0)
            .build()
            .await?;

        assert_eq!(club.name, "Roma");
        assert_eq!(club.league.as_deref(), Some("Serie A"));
        assert_eq!(club.budget, 1_500_000.0);

        Ok(())
    }
}
