use super::*;
use crate::{
    model::player::CreatePlayerDto,
    server::{model::player::CreatePlayerParams, service::player::PlayerService},
};

/// Tests that players are stored as given, including an unchecked club reference.
///
/// Expected: Ok with the player listed and `current_club_id` kept verbatim
#[tokio::test]
async fn stores_player_without_checking_club() {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let store = Store::connected(test.db.clone().unwrap());

    let params = CreatePlayerParams::from_dto(CreatePlayerDto {
        name: "Daniele De Rossi".to_string(),
        position: "Midfielder".to_string(),
        age: Some(30),
        nationality: Some("Italy".to_string()),
        current_club_id: Some("not-a-club".to_string()),
        height_cm: Some(184),
        preferred_foot: Some("right".to_string()),
        bio: None,
        skills: Some(vec!["tackling".to_string(), "passing".to_string()]),
        market_value: Some(15_000_000.0),
    })
    .unwrap();

    let service = PlayerService::new(&store);
    let id = service.create(params).await.unwrap();
    let players = service.get_all().await.unwrap();

    assert_eq!(players.len(), 1);
    assert_eq!(players[0].id, id);
    assert_eq!(players[0].current_club_id.as_deref(), Some("not-a-club"));
    assert_eq!(players[0].skills, vec!["tackling", "passing"]);
}
