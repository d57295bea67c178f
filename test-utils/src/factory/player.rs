//! Player factory for creating test player documents.

use crate::factory::helpers::{next_document_id, next_id};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test players with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db)
///     .name("Daniele De Rossi")
///     .skills(vec!["tackling".to_string()])
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    position: String,
    age: Option<i32>,
    current_club_id: Option<String>,
    skills: Vec<String>,
    market_value: Option<f64>,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - id: unique 24 character hex id
    /// - name: `"Player {n}"`
    /// - position: `"Midfielder"`
    /// - every optional field unset, no skills
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            id: next_document_id(),
            name: format!("Player {}", next_id()),
            position: "Midfielder".to_string(),
            age: None,
            current_club_id: None,
            skills: Vec::new(),
            market_value: None,
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

    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn age(mut self, age: Option<i32>) -> Self {
        self.age = age;
        self
    }

    pub fn current_club_id(mut self, club_id: Option<String>) -> Self {
        self.current_club_id = club_id;
        self
    }

    pub fn skills(mut self, skills: Vec<String>) -> Self {
        self.skills = skills;
        self
    }

    pub fn market_value(mut self, market_value: Option<f64>) -> Self {
        self.market_value = market_value;
        self
    }

    /// Builds and inserts the player entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::player::Model)` - Created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            position: ActiveValue::Set(self.position),
            age: ActiveValue::Set(self.age),
            nationality: ActiveValue::Set(None),
            current_club_id: ActiveValue::Set(self.current_club_id),
            height_cm: ActiveValue::Set(None),
            preferred_foot: ActiveValue::Set(None),
            bio: ActiveValue::Set(None),
            skills: ActiveValue::Set(serde_json::json!(self.skills)),
            market_value: ActiveValue::Set(self.market_value),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// Shorthand for `PlayerFactory::new(db).build().await`.
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn creates_player_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Player)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let player = create_player(db).await?;

        assert_eq!(player.id.len(), 24);
        assert_eq!(player.position, "Midfielder");
        assert_eq!(player.skills, serde_json::json!([]));

        let stored = Player::find_by_id(player.id.clone()).one(db).await?;
        assert_eq!(stored, Some(player));

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_players() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Player)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_player(db).await?;
        let second = create_player(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
