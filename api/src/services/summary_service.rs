// Lot summaries over stored teams and hashes

use std::collections::HashMap;

use crate::db::{HashFilter, TeamFilter};
use crate::entity::crypto_hashes;
use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::TeamSummary;
use crate::services::summary_calculator::summarize;
use crate::services::team_service::find_team;

/// Summary for a single team, `NotFound` when the team is unknown
pub async fn get_team_summary(state: &AppState, team_id: &str) -> ApiResult<TeamSummary> {
    let team = find_team(state, team_id).await?;
    let hashes = state
        .repositories
        .hash
        .find_all(&HashFilter::for_team(team_id))
        .await?;

    Ok(summarize(&team, &hashes))
}

/// Summaries for every team, in team listing order
pub async fn get_all_summaries(state: &AppState) -> ApiResult<Vec<TeamSummary>> {
    let teams = state
        .repositories
        .team
        .find_all(&TeamFilter::default())
        .await?;
    let hashes = state
        .repositories
        .hash
        .find_all(&HashFilter::default())
        .await?;

    let mut by_team: HashMap<String, Vec<crypto_hashes::Model>> = HashMap::new();
    for hash in hashes {
        by_team.entry(hash.team_id.clone()).or_default().push(hash);
    }

    let summaries = teams
        .iter()
        .map(|team| {
            let hashes = by_team.get(&team.id).map(Vec::as_slice).unwrap_or(&[]);
            summarize(team, hashes)
        })
        .collect();

    Ok(summaries)
}
