use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use catalog_backend::{AppState, handlers};
use http_body_util::BodyExt;
use sea_orm::{Database, DatabaseConnection, DbErr};
use serde_json::Value;
use std::env;
use tower::ServiceExt;

/// Set up test database connection
/// Returns None when TEST_DATABASE_URL is not set so database tests can be skipped
#[allow(dead_code)]
pub async fn setup_test_db() -> Option<Result<DatabaseConnection, DbErr>> {
    let database_url = env::var("TEST_DATABASE_URL").ok()?;
    Some(Database::connect(&database_url).await)
}

/// Router over a fresh in-memory store
#[allow(dead_code)]
pub fn build_test_router() -> Router {
    handlers::router(AppState::in_memory())
}

/// Send a request and return the status with the parsed JSON body (Null when empty)
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(app, request).await
}

#[allow(dead_code)]
pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
