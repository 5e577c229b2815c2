// Handlers Module
// This module contains the API endpoint handlers

pub mod hashes;
pub mod health;
pub mod summaries;
pub mod teams;

use std::sync::Arc;

use crate::db::Repositories;

pub use hashes::{create_hash, delete_hash, get_hash, get_hashes, update_hash};
pub use health::{api_root, health_check};
pub use summaries::{get_team_summaries, get_team_summary};
pub use teams::{create_team, delete_team, get_team, get_teams, update_team};

/// Application state shared with all handlers
#[derive(Clone)]
pub struct AppState {
    pub repositories: Arc<Repositories>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            repositories: Arc::new(repositories),
        }
    }
}
