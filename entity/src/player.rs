use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "_id")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub current_club_id: Option<String>,
    pub height_cm: Option<i32>,
    pub preferred_foot: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    /// Ordered list of skill tags, stored as a JSON array.
    pub skills: Json,
    pub market_value: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
