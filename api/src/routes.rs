// API routes

use axum::{
    routing::get,
    Router,
};

use crate::handlers::{
    api_root, create_hash, create_team, delete_hash, delete_team, get_hash, get_hashes, get_team,
    get_team_summaries, get_team_summary, get_teams, health_check, update_hash, update_team,
    AppState,
};

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api", get(api_root))
        .route("/api/", get(api_root))
        // Teams
        .route("/api/teams", get(get_teams).post(create_team))
        .route("/api/teams/summary", get(get_team_summaries))
        .route(
            "/api/teams/{team_id}",
            get(get_team).put(update_team).delete(delete_team),
        )
        .route("/api/teams/{team_id}/summary", get(get_team_summary))
        // Hashes
        .route("/api/hashes", get(get_hashes).post(create_hash))
        .route(
            "/api/hashes/{hash_id}",
            get(get_hash).put(update_hash).delete(delete_hash),
        )
        .with_state(state)
}
