use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext};
use tower::ServiceExt;

use crate::server::{data::store::Store, router, state::AppState};

mod club;
mod listing;

/// Router over a fresh in-memory store. The context owns the connection and must
/// outlive the router.
async fn setup() -> (TestContext, Router) {
    let test = TestBuilder::new().with_document_tables().build().await.unwrap();
    let store = Store::connected(test.db.clone().unwrap());

    (test, app(store))
}

fn app(store: Store) -> Router {
    router::router().with_state(AppState {
        store,
        database_name: Some("calciomercato".to_string()),
        database_url_set: true,
    })
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

/// Creates a document and returns its id, asserting 200.
async fn create(app: &Router, uri: &str, body: Value) -> String {
    let (status, value) = post(app, uri, body).await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {}", value);

    value["id"].as_str().unwrap().to_string()
}
