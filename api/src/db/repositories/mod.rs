// Database repository management

mod hash_repository;
mod team_repository;

pub use hash_repository::{HashFilter, HashRepository};
pub use team_repository::{TeamFilter, TeamRepository};

use sea_orm::DatabaseConnection;

/// Container for all database repositories
#[derive(Clone)]
pub struct Repositories {
    pub team: TeamRepository,
    pub hash: HashRepository,
}

impl Repositories {
    /// Creates a new repositories container with database connection
    pub fn new(conn: DatabaseConnection) -> Self {
        Repositories {
            team: TeamRepository::new(conn.clone()),
            hash: HashRepository::new(conn),
        }
    }
}
