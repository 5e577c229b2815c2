mod common;

use axum::http::{Method, StatusCode};
use sea_orm::DatabaseConnection;
use serde_json::json;

use hashlots_api::db::Repositories;
use hashlots_api::{create_router, AppState};

use crate::common::{build_test_router, create_hash, create_team, send};

#[tokio::test]
async fn test_api_root() {
    let app = build_test_router().await;

    let (status, body) = send(&app, Method::GET, "/api/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Crypto Financial App API");
}

#[tokio::test]
async fn test_health_check_reports_database() {
    let app = build_test_router().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_health_check_without_database() {
    let repositories = Repositories::new(DatabaseConnection::Disconnected);
    let app = create_router(AppState::new(repositories));

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "unavailable");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_create_and_get_team() {
    let app = build_test_router().await;

    let team = create_team(&app, "Alpha Team", 1000.0, 100.0).await;
    let team_id = team["id"].as_str().unwrap();
    assert_eq!(team["name"], "Alpha Team");
    assert_eq!(team["rub_price_per_lot"].as_f64(), Some(1000.0));
    assert_eq!(team["usdt_price_per_lot"].as_f64(), Some(100.0));
    assert!(team["created_at"].is_string());
    assert!(team["updated_at"].is_string());

    let (status, fetched) = send(&app, Method::GET, &format!("/api/teams/{}", team_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], team["id"]);
    assert_eq!(fetched["name"], "Alpha Team");
}

#[tokio::test]
async fn test_get_unknown_team_is_not_found() {
    let app = build_test_router().await;

    let (status, body) = send(&app, Method::GET, "/api/teams/does-not-exist", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Team not found");
}

#[tokio::test]
async fn test_create_team_rejects_negative_price() {
    let app = build_test_router().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/teams",
        Some(json!({
            "name": "Broken",
            "rub_price_per_lot": -5.0,
            "usdt_price_per_lot": 100.0,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("rub_price_per_lot"));
}

#[tokio::test]
async fn test_create_team_allows_zero_price() {
    let app = build_test_router().await;

    let team = create_team(&app, "Free", 0.0, 0.0).await;

    assert_eq!(team["rub_price_per_lot"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let app = build_test_router().await;
    create_team(&app, "Alpha Miners", 1000.0, 100.0).await;
    create_team(&app, "Beta Pool", 1000.0, 100.0).await;
    create_team(&app, "Команда Альфа", 1000.0, 100.0).await;

    let (status, body) = send(&app, Method::GET, "/api/teams?search=ALPHA", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Alpha Miners"]);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/teams?search=%D0%B0%D0%BB%D1%8C%D1%84%D0%B0",
        None,
    )
    .await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Команда Альфа"]);

    let (_, body) = send(&app, Method::GET, "/api/teams", None).await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_team_changes_only_given_fields() {
    let app = build_test_router().await;
    let team = create_team(&app, "Gamma", 1000.0, 100.0).await;
    let team_id = team["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/teams/{}", team_id),
        Some(json!({ "usdt_price_per_lot": 250.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Gamma");
    assert_eq!(updated["rub_price_per_lot"].as_f64(), Some(1000.0));
    assert_eq!(updated["usdt_price_per_lot"].as_f64(), Some(250.0));
    assert_eq!(updated["created_at"], team["created_at"]);
    assert_ne!(updated["updated_at"], team["updated_at"]);
}

#[tokio::test]
async fn test_empty_update_leaves_team_untouched() {
    let app = build_test_router().await;
    let team = create_team(&app, "Delta", 1000.0, 100.0).await;
    let team_id = team["id"].as_str().unwrap();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/teams/{}", team_id),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, team);
}

#[tokio::test]
async fn test_update_unknown_team_is_not_found() {
    let app = build_test_router().await;

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/teams/missing",
        Some(json!({ "name": "Nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_team_cascades_to_hashes() {
    let app = build_test_router().await;
    let team = create_team(&app, "Doomed", 1000.0, 100.0).await;
    let team_id = team["id"].as_str().unwrap();
    let other = create_team(&app, "Survivor", 1000.0, 100.0).await;
    let other_id = other["id"].as_str().unwrap();

    let (status, _) = create_hash(&app, team_id, 5000.0, "USDT", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = create_hash(&app, team_id, 10.0, "RUB", Some(80.0)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = create_hash(&app, other_id, 1.0, "USDT", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, Method::DELETE, &format!("/api/teams/{}", team_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Team and all associated hashes deleted successfully"
    );

    let (_, hashes) = send(&app, Method::GET, &format!("/api/hashes?team_id={}", team_id), None).await;
    assert!(hashes.as_array().unwrap().is_empty());

    let (_, all_hashes) = send(&app, Method::GET, "/api/hashes", None).await;
    assert_eq!(all_hashes.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::GET, &format!("/api/teams/{}/summary", team_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/teams/{}", team_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
