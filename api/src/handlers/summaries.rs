// Handlers for lot summary endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::TeamSummary;
use crate::services::summary_service;

/// Handler for GET /api/teams/summary - Summaries for every team
pub async fn get_team_summaries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TeamSummary>>> {
    let summaries = summary_service::get_all_summaries(&state).await?;
    Ok(Json(summaries))
}

/// Handler for GET /api/teams/{team_id}/summary
pub async fn get_team_summary(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<Json<TeamSummary>> {
    let summary = summary_service::get_team_summary(&state, &team_id).await?;
    Ok(Json(summary))
}
