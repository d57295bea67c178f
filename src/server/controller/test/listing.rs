use super::*;

/// Tests the full flow from an empty store to a listing read back with its player.
///
/// Expected: one listing with the nested player, status `open` and no `from_club` key
#[tokio::test]
async fn lists_listing_with_player_and_no_source_club() {
    let (_test, app) = setup().await;

    create(&app, "/clubs", json!({"name": "Roma", "budget": 0})).await;
    let player_id = create(&app, "/players", json!({"name": "X", "position": "Forward"})).await;
    let listing_id = create(
        &app,
        "/listings",
        json!({"player_id": player_id, "asking_price": 1000}),
    )
    .await;

    let (status, listings) = get(&app, "/listings").await;

    assert_eq!(status, StatusCode::OK);
    let listings = listings.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["id"], listing_id.as_str());
    assert_eq!(listings[0]["player"]["id"], player_id.as_str());
    assert_eq!(listings[0]["asking_price"], json!(1000.0));
    assert_eq!(listings[0]["status"], "open");
    assert!(listings[0].get("from_club").is_none());
    assert!(listings[0]["player"].get("_id").is_none());
}

/// Expected: `from_club` resolved to the referenced club
#[tokio::test]
async fn resolves_source_club() {
    let (_test, app) = setup().await;

    let club_id = create(&app, "/clubs", json!({"name": "Roma"})).await;
    let player_id = create(&app, "/players", json!({"name": "P", "position": "Keeper"})).await;
    create(
        &app,
        "/listings",
        json!({"player_id": player_id, "from_club_id": club_id, "asking_price": 5}),
    )
    .await;

    let (_, listings) = get(&app, "/listings").await;

    assert_eq!(listings[0]["player"]["id"], player_id.as_str());
    assert_eq!(listings[0]["from_club"]["id"], club_id.as_str());
    assert_eq!(listings[0]["from_club"]["name"], "Roma");
}

/// Expected: identical responses for repeated reads without writes
#[tokio::test]
async fn repeated_reads_are_identical() {
    let (_test, app) = setup().await;

    let player_id = create(&app, "/players", json!({"name": "P", "position": "Keeper"})).await;
    for price in [1, 2, 3] {
        create(
            &app,
            "/listings",
            json!({"player_id": player_id, "asking_price": price}),
        )
        .await;
    }

    let (_, first) = get(&app, "/listings").await;
    let (_, second) = get(&app, "/listings").await;

    assert_eq!(first.as_array().unwrap().len(), 3);
    assert_eq!(first, second);
}

/// Tests that id format is checked before anything touches the store.
///
/// Expected: 400 even though the store is unavailable
#[tokio::test]
async fn rejects_malformed_player_id_before_lookup() {
    let app = app(Store::unavailable());

    let (status, body) = post(
        &app,
        "/listings",
        json!({"player_id": "not-an-id", "asking_price": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid player_id");
}

/// Expected: 404 naming the player and no listing stored
#[tokio::test]
async fn rejects_unknown_player() {
    let (_test, app) = setup().await;

    let (status, body) = post(
        &app,
        "/listings",
        json!({"player_id": "65a1f0c2e4b0a1b2c3d4e5f6", "asking_price": 10}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Player not found");

    let (_, listings) = get(&app, "/listings").await;
    assert_eq!(listings, json!([]));
}

/// Expected: 422 for an unknown status value
#[tokio::test]
async fn rejects_unknown_status() {
    let (_test, app) = setup().await;

    let player_id = create(&app, "/players", json!({"name": "P", "position": "Keeper"})).await;
    let (status, body) = post(
        &app,
        "/listings",
        json!({"player_id": player_id, "asking_price": 10, "status": "sold"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "status");
}
