use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /clubs`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateClubDto {
    pub name: String,
    /// League name, e.g. Serie A.
    pub league: Option<String>,
    pub country: Option<String>,
    /// Transfer budget in EUR, not negative, defaults to 0.
    pub budget: Option<f64>,
    pub stadium: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClubDto {
    pub id: String,
    pub name: String,
    pub league: Option<String>,
    pub country: Option<String>,
    pub budget: f64,
    pub stadium: Option<String>,
    pub bio: Option<String>,
}
