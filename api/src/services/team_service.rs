// Team lifecycle business logic

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::TeamFilter;
use crate::entity::teams;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{MessageResponse, TeamCreate, TeamData, TeamUpdate};
use crate::services::validation;

pub async fn create_team(state: &AppState, payload: TeamCreate) -> ApiResult<TeamData> {
    let name = validation::team_name(&payload.name).inspect_err(log_rejection)?;
    let rub_price = validation::price_per_lot("rub_price_per_lot", payload.rub_price_per_lot)
        .inspect_err(log_rejection)?;
    let usdt_price = validation::price_per_lot("usdt_price_per_lot", payload.usdt_price_per_lot)
        .inspect_err(log_rejection)?;

    let now = Utc::now();
    let team = teams::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        name: Set(name),
        rub_price_per_lot: Set(rub_price),
        usdt_price_per_lot: Set(usdt_price),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let team = state.repositories.team.save(team).await?;
    info!("Created team {} ({})", team.id, team.name);

    Ok(team.into())
}

pub async fn list_teams(state: &AppState, search: Option<&str>) -> ApiResult<Vec<TeamData>> {
    let filter = match search {
        Some(search) => TeamFilter::name_contains(search),
        None => TeamFilter::default(),
    };

    let teams = state.repositories.team.find_all(&filter).await?;
    Ok(teams.into_iter().map(TeamData::from).collect())
}

pub async fn get_team(state: &AppState, team_id: &str) -> ApiResult<TeamData> {
    find_team(state, team_id).await.map(TeamData::from)
}

pub async fn update_team(
    state: &AppState,
    team_id: &str,
    payload: TeamUpdate,
) -> ApiResult<TeamData> {
    let existing = find_team(state, team_id).await?;
    if payload.is_empty() {
        return Ok(existing.into());
    }

    let mut team: teams::ActiveModel = existing.into();

    if let Some(name) = &payload.name {
        team.name = Set(validation::team_name(name).inspect_err(log_rejection)?);
    }
    if let Some(price) = payload.rub_price_per_lot {
        team.rub_price_per_lot = Set(
            validation::price_per_lot("rub_price_per_lot", price).inspect_err(log_rejection)?,
        );
    }
    if let Some(price) = payload.usdt_price_per_lot {
        team.usdt_price_per_lot = Set(
            validation::price_per_lot("usdt_price_per_lot", price).inspect_err(log_rejection)?,
        );
    }
    team.updated_at = Set(Utc::now());

    let team = state.repositories.team.update(team).await?;
    info!("Updated team {}", team.id);

    Ok(team.into())
}

/// Deletes the team and, in the same transaction, every hash that references it
pub async fn delete_team(state: &AppState, team_id: &str) -> ApiResult<MessageResponse> {
    match state.repositories.team.delete(team_id).await? {
        Some(removed_hashes) => {
            info!(
                "Deleted team {} together with {} hashes",
                team_id, removed_hashes
            );
            Ok(MessageResponse::new(
                "Team and all associated hashes deleted successfully",
            ))
        }
        None => Err(team_not_found()),
    }
}

pub(crate) async fn find_team(state: &AppState, team_id: &str) -> ApiResult<teams::Model> {
    state
        .repositories
        .team
        .find_by_id(team_id)
        .await?
        .ok_or_else(team_not_found)
}

fn team_not_found() -> ApiError {
    ApiError::NotFound("Team not found".into())
}

fn log_rejection(err: &ApiError) {
    warn!("Rejected team payload: {}", err);
}
