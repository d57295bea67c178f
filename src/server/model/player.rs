//! Player domain models and parameters.

use sea_orm::{ActiveValue, DbErr};

use crate::{
    model::player::{CreatePlayerDto, PlayerDto},
    server::{
        data::store::IntoDocument,
        error::validation::ValidationError,
        model::object_id::ObjectId,
        util::validate::{check_non_negative, check_range},
    },
};

pub const MIN_AGE: i32 = 8;
pub const MAX_AGE: i32 = 60;
pub const MIN_HEIGHT_CM: i32 = 100;
pub const MAX_HEIGHT_CM: i32 = 230;

/// A stored player.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: ObjectId,
    pub name: String,
    pub position: String,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    /// Opaque reference to a club; never validated.
    pub current_club_id: Option<String>,
    pub height_cm: Option<i32>,
    pub preferred_foot: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub market_value: Option<f64>,
}

impl Player {
    /// Converts an entity model to a player domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Player)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored id or skills column could not be decoded
    pub fn from_entity(entity: entity::player::Model) -> Result<Self, DbErr> {
        let id = entity
            .id
            .parse::<ObjectId>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse player id: {}", e)))?;
        let skills = serde_json::from_value::<Vec<String>>(entity.skills)
            .map_err(|e| DbErr::Custom(format!("Failed to parse skills of player {}: {}", id, e)))?;

        Ok(Self {
            id,
            name: entity.name,
            position: entity.position,
            age: entity.age,
            nationality: entity.nationality,
            current_club_id: entity.current_club_id,
            height_cm: entity.height_cm,
            preferred_foot: entity.preferred_foot,
            bio: entity.bio,
            skills,
            market_value: entity.market_value,
        })
    }

    /// Converts the player to its API representation with a flattened `id`.
    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            id: self.id.into(),
            name: self.name,
            position: self.position,
            age: self.age,
            nationality: self.nationality,
            current_club_id: self.current_club_id,
            height_cm: self.height_cm,
            preferred_foot: self.preferred_foot,
            bio: self.bio,
            skills: self.skills,
            market_value: self.market_value,
        }
    }
}

/// Validated parameters for creating a player.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlayerParams {
    pub name: String,
    pub position: String,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub current_club_id: Option<String>,
    pub height_cm: Option<i32>,
    pub preferred_foot: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub market_value: Option<f64>,
}

impl CreatePlayerParams {
    /// Validates the request body and applies defaults.
    ///
    /// # Returns
    /// - `Ok(CreatePlayerParams)` - Body satisfies the player schema
    /// - `Err(ValidationError)` - Age, height or market value out of bounds
    pub fn from_dto(dto: CreatePlayerDto) -> Result<Self, ValidationError> {
        check_range("age", dto.age, MIN_AGE, MAX_AGE)?;
        check_range("height_cm", dto.height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
        if let Some(market_value) = dto.market_value {
            check_non_negative("market_value", market_value)?;
        }

        Ok(Self {
            name: dto.name,
            position: dto.position,
            age: dto.age,
            nationality: dto.nationality,
            current_club_id: dto.current_club_id,
            height_cm: dto.height_cm,
            preferred_foot: dto.preferred_foot,
            bio: dto.bio,
            skills: dto.skills.unwrap_or_default(),
            market_value: dto.market_value,
        })
    }
}

impl IntoDocument for CreatePlayerParams {
    type Entity = entity::player::Entity;
    type ActiveModel = entity::player::ActiveModel;

    fn into_active_model(self, id: &ObjectId) -> Self::ActiveModel {
        entity::player::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            name: ActiveValue::Set(self.name),
            position: ActiveValue::Set(self.position),
            age: ActiveValue::Set(self.age),
            nationality: ActiveValue::Set(self.nationality),
            current_club_id: ActiveValue::Set(self.current_club_id),
            height_cm: ActiveValue::Set(self.height_cm),
            preferred_foot: ActiveValue::Set(self.preferred_foot),
            bio: ActiveValue::Set(self.bio),
            skills: ActiveValue::Set(serde_json::json!(self.skills)),
            market_value: ActiveValue::Set(self.market_value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> CreatePlayerDto {
        CreatePlayerDto {
            name: "Francesco Totti".to_string(),
            position: "Forward".to_string(),
            age: None,
            nationality: None,
            current_club_id: None,
            height_cm: None,
            preferred_foot: None,
            bio: None,
            skills: None,
            market_value: None,
        }
    }

    #[test]
    fn applies_empty_skills_default() {
        let params = CreatePlayerParams::from_dto(dto()).unwrap();

        assert!(params.skills.is_empty());
        assert_eq!(params.name, "Francesco Totti");
    }

    #[test]
    fn rejects_age_outside_bounds() {
        let err = CreatePlayerParams::from_dto(CreatePlayerDto {
            age: Some(61),
            ..dto()
        })
        .unwrap_err();

        assert_eq!(err.field, "age");
    }

    #[test]
    fn rejects_height_outside_bounds() {
        let err = CreatePlayerParams::from_dto(CreatePlayerDto {
            height_cm: Some(99),
            ..dto()
        })
        .unwrap_err();

        assert_eq!(err.field, "height_cm");
    }

    #[test]
    fn rejects_negative_market_value() {
        let err = CreatePlayerParams::from_dto(CreatePlayerDto {
            market_value: Some(-1.0),
            ..dto()
        })
        .unwrap_err();

        assert_eq!(err.field, "market_value");
    }

    #[test]
    fn keeps_boundary_values() {
        let params = CreatePlayerParams::from_dto(CreatePlayerDto {
            age: Some(8),
            height_cm: Some(230),
            market_value: Some(0.0),
            skills: Some(vec!["dribbling".to_string(), "vision".to_string()]),
            ..dto()
        })
        .unwrap();

        assert_eq!(params.age, Some(8));
        assert_eq!(params.height_cm, Some(230));
        assert_eq!(params.skills, vec!["dribbling", "vision"]);
    }
}
