use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::startup;


/// Creates an in-memory database with the camp schema.
async fn setup() -> (TestContext, DatabaseConnection) {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();
    (test, db)
}

/// Sends a body that need not be a JSON object, or JSON at all.
async fn send_raw(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    dispatch(db, request).await
}

/// Sends one request through the full application.
///
/// Returns the status and the decoded JSON body, `Value::Null` when the body is
/// empty.
async fn send(
    db: &DatabaseConnection,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
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

    dispatch(db, request).await
}

async fn dispatch(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Value) {
    let app: Router = startup::app(db.clone());

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
