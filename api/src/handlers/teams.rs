// Handlers for team endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{MessageResponse, TeamCreate, TeamData, TeamUpdate, TeamsQuery};
use crate::services::team_service;

/// Handler for POST /api/teams - Creates a team
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<TeamCreate>,
) -> ApiResult<Json<TeamData>> {
    let team = team_service::create_team(&state, payload).await?;
    Ok(Json(team))
}

/// Handler for GET /api/teams - Lists teams, optionally filtered by `search`
pub async fn get_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamsQuery>,
) -> ApiResult<Json<Vec<TeamData>>> {
    let teams = team_service::list_teams(&state, params.search.as_deref()).await?;
    Ok(Json(teams))
}

/// Handler for GET /api/teams/{team_id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<Json<TeamData>> {
    let team = team_service::get_team(&state, &team_id).await?;
    Ok(Json(team))
}

/// Handler for PUT /api/teams/{team_id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    Json(payload): Json<TeamUpdate>,
) -> ApiResult<Json<TeamData>> {
    let team = team_service::update_team(&state, &team_id, payload).await?;
    Ok(Json(team))
}

/// Handler for DELETE /api/teams/{team_id} - Also removes the team's hashes
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let response = team_service::delete_team(&state, &team_id).await?;
    Ok(Json(response))
}
