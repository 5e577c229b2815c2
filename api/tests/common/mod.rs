#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hashlots_api::config::ApiConfig;
use hashlots_api::db::DbPool;
use hashlots_api::{create_router, AppState};

/// Fresh in-memory SQLite database with the schema applied
pub async fn setup_test_db() -> DbPool {
    let config = ApiConfig::with_database_url("sqlite::memory:");
    let pool = DbPool::new(&config)
        .await
        .expect("Failed to open in-memory database");
    pool.run_migrations()
        .await
        .expect("Failed to run migrations");
    pool
}

pub async fn create_test_app_state() -> AppState {
    let pool = setup_test_db().await;
    AppState::new(pool.repositories())
}

pub async fn build_test_router() -> Router {
    create_router(create_test_app_state().await)
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` when the body is empty)
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

pub async fn create_team(app: &Router, name: &str, rub_price: f64, usdt_price: f64) -> Value {
    let (status, team) = send(
        app,
        Method::POST,
        "/api/teams",
        Some(json!({
            "name": name,
            "rub_price_per_lot": rub_price,
            "usdt_price_per_lot": usdt_price,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "team creation failed: {}", team);
    team
}

pub async fn create_hash(
    app: &Router,
    team_id: &str,
    token_amount: f64,
    currency: &str,
    exchange_rate: Option<f64>,
) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/hashes",
        Some(json!({
            "team_id": team_id,
            "hash_value": format!("hash-{}-{}", currency, token_amount),
            "token_amount": token_amount,
            "currency": currency,
            "exchange_rate": exchange_rate,
        })),
    )
    .await
}

pub fn assert_close(actual: &Value, expected: f64) {
    let actual = actual
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {}", actual));
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}
