use super::*;

/// Expected: budget defaults to 0 when omitted
#[tokio::test]
async fn defaults_budget() {
    let (_test, app) = setup().await;

    let id = create(&app, "/clubs", json!({"name": "Roma"})).await;
    let (status, clubs) = get(&app, "/clubs").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(clubs[0]["id"], id.as_str());
    assert_eq!(clubs[0]["budget"], json!(0.0));
}

/// Expected: 422 naming `budget`
#[tokio::test]
async fn rejects_negative_budget() {
    let (_test, app) = setup().await;

    let (status, body) = post(&app, "/clubs", json!({"name": "Roma", "budget": -1})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "budget");
}

/// Expected: every club field returned unchanged, clubs in insertion order
#[tokio::test]
async fn round_trips_clubs_in_order() {
    let (_test, app) = setup().await;

    let roma = json!({
        "name": "Roma",
        "league": "Serie A",
        "country": "Italy",
        "budget": 120000000.0,
        "stadium": "Stadio Olimpico",
        "bio": "Founded in 1927"
    });
    let lazio = json!({
        "name": "Lazio",
        "league": "Serie A",
        "country": "Italy",
        "budget": 80000000.0,
        "stadium": "Stadio Olimpico",
        "bio": null
    });
    let roma_id = create(&app, "/clubs", roma.clone()).await;
    let lazio_id = create(&app, "/clubs", lazio.clone()).await;

    let (_, clubs) = get(&app, "/clubs").await;

    let mut expected_roma = roma;
    expected_roma["id"] = json!(roma_id);
    let mut expected_lazio = lazio;
    expected_lazio["id"] = json!(lazio_id);
    assert_eq!(clubs, json!([expected_roma, expected_lazio]));
}
