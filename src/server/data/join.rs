use sea_orm::{prelude::Json, DatabaseConnection, DbErr, FromQueryResult, Statement};

use crate::server::model::{
    listing::TransferListingWithRelations, offer::TransferOfferWithRelations,
};

/// Listings with their player and source club, both resolved by `LEFT JOIN`.
const LISTINGS_SQL: &str = "SELECT \
    l._id AS l_id, l.player_id AS l_player_id, l.from_club_id AS l_from_club_id, \
    l.asking_price AS l_asking_price, l.status AS l_status, \
    p._id AS p_id, p.name AS p_name, p.position AS p_position, p.age AS p_age, \
    p.nationality AS p_nationality, p.current_club_id AS p_current_club_id, \
    p.height_cm AS p_height_cm, p.preferred_foot AS p_preferred_foot, p.bio AS p_bio, \
    p.skills AS p_skills, p.market_value AS p_market_value, \
    c._id AS c_id, c.name AS c_name, c.league AS c_league, c.country AS c_country, \
    c.budget AS c_budget, c.stadium AS c_stadium, c.bio AS c_bio \
    FROM transferlisting AS l \
    LEFT JOIN player AS p ON p._id = l.player_id \
    LEFT JOIN club AS c ON c._id = l.from_club_id \
    ORDER BY l.rowid";

/// Offers with their listing and bidding club, both resolved by `LEFT JOIN`.
const OFFERS_SQL: &str = "SELECT \
    o._id AS o_id, o.listing_id AS o_listing_id, o.club_id AS o_club_id, \
    o.offer_amount AS o_offer_amount, o.status AS o_status, o.message AS o_message, \
    l._id AS l_id, l.player_id AS l_player_id, l.from_club_id AS l_from_club_id, \
    l.asking_price AS l_asking_price, l.status AS l_status, \
    c._id AS c_id, c.name AS c_name, c.league AS c_league, c.country AS c_country, \
    c.budget AS c_budget, c.stadium AS c_stadium, c.bio AS c_bio \
    FROM transferoffer AS o \
    LEFT JOIN transferlisting AS l ON l._id = o.listing_id \
    LEFT JOIN club AS c ON c._id = o.club_id \
    ORDER BY o.rowid";

/// Composite reads that resolve document references.
///
/// Each view is a single statement: the engine plans both joins and no ids are bound
/// as parameters, so the cost does not depend on how many documents reference the
/// same target. Rows come back in insertion order of the owning collection.
pub struct JoinRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> JoinRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every listing with its player and, when referenced, its source club.
    pub async fn listings_with_relations(
        &self,
    ) -> Result<Vec<TransferListingWithRelations>, DbErr> {
        let rows = ListingRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            LISTINGS_SQL,
        ))
        .all(self.db)
        .await?;

        Ok(rows.into_iter().map(ListingRow::into_relations).collect())
    }

    /// Gets every offer with the listing it targets and the club that made it.
    pub async fn offers_with_relations(&self) -> Result<Vec<TransferOfferWithRelations>, DbErr> {
        let rows = OfferRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            OFFERS_SQL,
        ))
        .all(self.db)
        .await?;

        Ok(rows.into_iter().map(OfferRow::into_relations).collect())
    }
}

/// Club columns of a join row; every field is null when the club was not matched.
struct ClubColumns {
    c_id: Option<String>,
    c_name: Option<String>,
    c_league: Option<String>,
    c_country: Option<String>,
    c_budget: Option<f64>,
    c_stadium: Option<String>,
    c_bio: Option<String>,
}

impl ClubColumns {
    fn into_model(self) -> Option<entity::club::Model> {
        let (Some(id), Some(name), Some(budget)) = (self.c_id, self.c_name, self.c_budget) else {
            return None;
        };

        Some(entity::club::Model {
            id,
            name,
            league: self.c_league,
            country: self.c_country,
            budget,
            stadium: self.c_stadium,
            bio: self.c_bio,
        })
    }
}

#[derive(Debug, FromQueryResult)]
struct ListingRow {
    l_id: String,
    l_player_id: String,
    l_from_club_id: Option<String>,
    l_asking_price: f64,
    l_status: String,
    p_id: Option<String>,
    p_name: Option<String>,
    p_position: Option<String>,
    p_age: Option<i32>,
    p_nationality: Option<String>,
    p_current_club_id: Option<String>,
    p_height_cm: Option<i32>,
    p_preferred_foot: Option<String>,
    p_bio: Option<String>,
    p_skills: Option<Json>,
    p_market_value: Option<f64>,
    c_id: Option<String>,
    c_name: Option<String>,
    c_league: Option<String>,
    c_country: Option<String>,
    c_budget: Option<f64>,
    c_stadium: Option<String>,
    c_bio: Option<String>,
}

impl ListingRow {
    fn into_relations(self) -> TransferListingWithRelations {
        let player = match (self.p_id, self.p_name, self.p_position, self.p_skills) {
            (Some(id), Some(name), Some(position), Some(skills)) => Some(entity::player::Model {
                id,
                name,
                position,
                age: self.p_age,
                nationality: self.p_nationality,
                current_club_id: self.p_current_club_id,
                height_cm: self.p_height_cm,
                preferred_foot: self.p_preferred_foot,
                bio: self.p_bio,
                skills,
                market_value: self.p_market_value,
            }),
            _ => None,
        };

        TransferListingWithRelations {
            listing: entity::transfer_listing::Model {
                id: self.l_id,
                player_id: self.l_player_id,
                from_club_id: self.l_from_club_id,
                asking_price: self.l_asking_price,
                status: self.l_status,
            },
            player,
            from_club: ClubColumns {
                c_id: self.c_id,
                c_name: self.c_name,
                c_league: self.c_league,
                c_country: self.c_country,
                c_budget: self.c_budget,
                c_stadium: self.c_stadium,
                c_bio: self.c_bio,
            }
            .into_model(),
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct OfferRow {
    o_id: String,
    o_listing_id: String,
    o_club_id: String,
    o_offer_amount: f64,
    o_status: String,
    o_message: Option<String>,
    l_id: Option<String>,
    l_player_id: Option<String>,
    l_from_club_id: Option<String>,
    l_asking_price: Option<f64>,
    l_status: Option<String>,
    c_id: Option<String>,
    c_name: Option<String>,
    c_league: Option<String>,
    c_country: Option<String>,
    c_budget: Option<f64>,
    c_stadium: Option<String>,
    c_bio: Option<String>,
}

impl OfferRow {
    fn into_relations(self) -> TransferOfferWithRelations {
        let listing = match (self.l_id, self.l_player_id, self.l_asking_price, self.l_status) {
            (Some(id), Some(player_id), Some(asking_price), Some(status)) => {
                Some(entity::transfer_listing::Model {
                    id,
                    player_id,
                    from_club_id: self.l_from_club_id,
                    asking_price,
                    status,
                })
            }
            _ => None,
        };

        TransferOfferWithRelations {
            offer: entity::transfer_offer::Model {
                id: self.o_id,
                listing_id: self.o_listing_id,
                club_id: self.o_club_id,
                offer_amount: self.o_offer_amount,
                status: self.o_status,
                message: self.o_message,
            },
            listing,
            club: ClubColumns {
                c_id: self.c_id,
                c_name: self.c_name,
                c_league: self.c_league,
                c_country: self.c_country,
                c_budget: self.c_budget,
                c_stadium: self.c_stadium,
                c_bio: self.c_bio,
            }
            .into_model(),
        }
    }
}
