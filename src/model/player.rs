use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /players`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreatePlayerDto {
    /// Full name of the player.
    pub name: String,
    /// Primary position, e.g. Forward, Midfielder.
    pub position: String,
    /// Age in years, between 8 and 60.
    pub age: Option<i32>,
    pub nationality: Option<String>,
    /// Id of the player's current club. Stored as given.
    pub current_club_id: Option<String>,
    /// Height in centimeters, between 100 and 230.
    pub height_cm: Option<i32>,
    /// Right / Left / Both.
    pub preferred_foot: Option<String>,
    pub bio: Option<String>,
    /// Notable skills or tags, defaults to an empty list.
    pub skills: Option<Vec<String>>,
    /// Estimated market value in EUR, not negative.
    pub market_value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: String,
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
