//! Club domain models and parameters.

use sea_orm::{ActiveValue, DbErr};

use crate::{
    model::club::{ClubDto, CreateClubDto},
    server::{
        data::store::IntoDocument, error::validation::ValidationError,
        model::object_id::ObjectId, util::validate::check_non_negative,
    },
};

/// A stored club.
#[derive(Debug, Clone, PartialEq)]
pub struct Club {
    pub id: ObjectId,
    pub name: String,
    pub league: Option<String>,
    pub country: Option<String>,
    pub budget: f64,
    pub stadium: Option<String>,
    pub bio: Option<String>,
}

impl Club {
    /// Converts an entity model to a club domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Club)` - The converted domain model
    /// - `Err(DbErr::Custom)` - Stored id is not a valid document id
    pub fn from_entity(entity: entity::club::Model) -> Result<Self, DbErr> {
        let id = entity
            .id
            .parse::<ObjectId>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse club id: {}", e)))?;

        Ok(Self {
            id,
            name: entity.name,
            league: entity.league,
            country: entity.country,
            budget: entity.budget,
            stadium: entity.stadium,
            bio: entity.bio,
        })
    }

    pub fn into_dto(self) -> ClubDto {
        ClubDto {
            id: self.id.into(),
            name: self.name,
            league: self.league,
            country: self.country,
            budget: self.budget,
            stadium: self.stadium,
            bio: self.bio,
        }
    }
}

/// Validated parameters for creating a club.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateClubParams {
    pub name: String,
    pub league: Option<String>,
    pub country: Option<String>,
    pub budget: f64,
    pub stadium: Option<String>,
    pub bio: Option<String>,
}

impl CreateClubParams {
    /// Validates the request body; an omitted or null budget becomes 0.
    pub fn from_dto(dto: CreateClubDto) -> Result<Self, ValidationError> {
        let budget = dto.budget.unwrap_or(0.0);
        check_non_negative("budget", budget)?;

        Ok(Self {
            name: dto.name,
            league: dto.league,
            country: dto.country,
            budget,
            stadium: dto.stadium,
            bio: dto.bio,
        })
    }
}

impl IntoDocument for CreateClubParams {
    type Entity = entity::club::Entity;
    type ActiveModel = entity::club::ActiveModel;

    fn into_active_model(self, id: &ObjectId) -> Self::ActiveModel {
        entity::club::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            name: ActiveValue::Set(self.name),
            league: ActiveValue::Set(self.league),
            country: ActiveValue::Set(self.country),
            budget: ActiveValue::Set(self.budget),
            stadium: ActiveValue::Set(self.stadium),
            bio: ActiveValue::Set(self.bio),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(budget: Option<f64>) -> CreateClubDto {
        CreateClubDto {
            name: "Roma".to_string(),
            league: Some("Serie A".to_string()),
            country: None,
            budget,
            stadium: None,
            bio: None,
        }
    }

    #[test]
    fn defaults_budget_to_zero() {
        let params = CreateClubParams::from_dto(dto(None)).unwrap();
        assert_eq!(params.budget, 0.0);
    }

    #[test]
    fn rejects_negative_budget() {
        let err = CreateClubParams::from_dto(dto(Some(-10.0))).unwrap_err();
        assert_eq!(err.field, "budget");
    }
}
