// Health check and root endpoint handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::handlers::AppState;
use crate::models::MessageResponse;
use crate::services::health::HealthChecker;

/// Handler for GET /health - Reports whether the database is reachable
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let checker = HealthChecker::new(state.repositories.team.get_connection().clone());
    let database_ok = checker.check().await;

    let status = if database_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = Json(json!({
        "status": if database_ok { "ok" } else { "degraded" },
        "database": if database_ok { "ok" } else { "unavailable" },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }));

    (status, body)
}

/// Handler for GET /api/
pub async fn api_root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Crypto Financial App API"))
}
