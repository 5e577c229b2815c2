mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{build_test_router, create_hash, create_team, send};

#[tokio::test]
async fn test_create_usdt_hash_without_rate() {
    let app = build_test_router().await;
    let team = create_team(&app, "Alpha", 1000.0, 100.0).await;
    let team_id = team["id"].as_str().unwrap();

    let (status, hash) = create_hash(&app, team_id, 5000.0, "USDT", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(hash["team_id"], team["id"]);
    assert_eq!(hash["currency"], "USDT");
    assert_eq!(hash["token_amount"].as_f64(), Some(5000.0));
    assert!(hash["exchange_rate"].is_null());
}

#[tokio::test]
async fn test_create_rub_hash_requires_rate() {
    let app = build_test_router().await;
    let team = create_team(&app, "Alpha", 1000.0, 100.0).await;
    let team_id = team["id"].as_str().unwrap();

    let (status, body) = create_hash(&app, team_id, 100.0, "RUB", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Exchange rate is required for RUB currency");

    // A zero rate is as unusable as a missing one
    let (status, _) = create_hash(&app, team_id, 100.0, "RUB", Some(0.0)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, hashes) = send(&app, Method::GET, "/api/hashes", None).await;
    assert!(hashes.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_hash_for_unknown_team_is_rejected() {
    let app = build_test_router().await;

    let (status, body) = create_hash(&app, "no-such-team", 1.0, "USDT", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("no-such-team"));
}

#[tokio::test]
async fn test_create_hash_rejects_unknown_currency() {
    let app = build_test_router().await;
    let team = create_team(&app, "Alpha", 1000.0, 100.0).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/hashes",
        Some(json!({
            "team_id": team["id"],
            "hash_value": "abc",
            "token_amount": 1.0,
            "currency": "EUR",
        })),
    )
    .await;

    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_create_hash_rejects_negative_amount() {
    let app = build_test_router().await;
    let team = create_team(&app, "Alpha", 1000.0, 100.0).await;
    let team_id = team["id"].as_str().unwrap();

    let (status, body) = create_hash(&app, team_id, -1.0, "USDT", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("token_amount"));
}

#[tokio::test]
async fn test_list_hashes_filters_by_team() {
    let app = build_test_router().await;
    let alpha = create_team(&app, "Alpha", 1000.0, 100.0).await;
    let beta = create_team(&app, "Beta", 1000.0, 100.0).await;
    let alpha_id = alpha["id"].as_str().unwrap();
    let beta_id = beta["id"].as_str().unwrap();

    create_hash(&app, alpha_id, 1.0, "USDT", None).await;
    create_hash(&app, alpha_id, 2.0, "RUB", Some(90.0)).await;
    create_hash(&app, beta_id, 3.0, "USDT", None).await;

    let (status, hashes) = send(
        &app,
        Method::GET,
        &format!("/api/hashes?team_id={}", alpha_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let hashes = hashes.as_array().unwrap();
    assert_eq!(hashes.len(), 2);
    assert!(hashes.iter().all(|h| h["team_id"] == alpha["id"]));

    let (_, all) = send(&app, Method::GET, "/api/hashes", None).await;
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_get_and_delete_hash() {
    let app = build_test_router().await;
    let team = create_team(&app, "Alpha", 1000.0, 100.0).await;
    let (_, hash) = create_hash(&app, team["id"].as_str().unwrap(), 1.0, "USDT", None).await;
    let uri = format!("/api/hashes/{}", hash["id"].as_str().unwrap());

    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, hash);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hash deleted successfully");

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Hash not found");

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_switch_to_rub_requires_rate() {
    let app = build_test_router().await;
    let team = create_team(&app, "Alpha", 1000.0, 100.0).await;
    let (_, hash) = create_hash(&app, team["id"].as_str().unwrap(), 10.0, "USDT", None).await;
    let uri = format!("/api/hashes/{}", hash["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "currency": "RUB" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Exchange rate is required for RUB currency");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "currency": "RUB", "exchange_rate": 95.5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["currency"], "RUB");
    assert_eq!(updated["exchange_rate"].as_f64(), Some(95.5));
    assert_eq!(updated["created_at"], hash["created_at"]);
}

#[tokio::test]
async fn test_rub_update_keeps_stored_rate() {
    let app = build_test_router().await;
    let team = create_team(&app, "Alpha", 1000.0, 100.0).await;
    let (_, hash) = create_hash(&app, team["id"].as_str().unwrap(), 10.0, "RUB", Some(80.0)).await;
    let uri = format!("/api/hashes/{}", hash["id"].as_str().unwrap());

    // The resulting record still has its rate, so restating the currency is fine
    let (status, updated) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "currency": "RUB", "token_amount": 20.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["token_amount"].as_f64(), Some(20.0));
    assert_eq!(updated["exchange_rate"].as_f64(), Some(80.0));
}

#[tokio::test]
async fn test_update_unknown_hash_is_not_found() {
    let app = build_test_router().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/hashes/missing",
        Some(json!({ "token_amount": 1.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
