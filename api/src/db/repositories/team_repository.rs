use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, TransactionTrait,
};

use crate::db::error::DbError;
use crate::db::repositories::hash_repository::{delete_many_on, HashFilter};
use crate::entity::prelude::Teams;
use crate::entity::teams::{ActiveModel, Column, Model};

/// Filter for team listings
#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    /// Case-insensitive substring of the team name
    pub name_contains: Option<String>,
}

impl TeamFilter {
    pub fn name_contains(search: impl Into<String>) -> Self {
        Self {
            name_contains: Some(search.into()),
        }
    }

    fn matches(&self, team: &Model) -> bool {
        match self.name_contains.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => team
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            _ => true,
        }
    }
}

/// Repository for team persistence
#[derive(Clone)]
pub struct TeamRepository {
    db: DatabaseConnection,
}

impl TeamRepository {
    /// Create a new team repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the database connection
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Insert a new team
    pub async fn save(&self, team: ActiveModel) -> Result<Model, DbError> {
        team.insert(&self.db).await.map_err(Into::into)
    }

    /// Persist the changed columns of an existing team
    pub async fn update(&self, team: ActiveModel) -> Result<Model, DbError> {
        team.update(&self.db).await.map_err(Into::into)
    }

    /// Find a team by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Model>, DbError> {
        Teams::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// List teams in creation order, optionally narrowed by name
    pub async fn find_all(&self, filter: &TeamFilter) -> Result<Vec<Model>, DbError> {
        let teams = Teams::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        // SQLite's lower() only folds ASCII, so names are matched here
        Ok(teams.into_iter().filter(|t| filter.matches(t)).collect())
    }

    /// Delete a team together with all of its hashes in one transaction.
    ///
    /// Returns `None` when the team does not exist, otherwise the number of
    /// hashes removed alongside it.
    pub async fn delete(&self, id: &str) -> Result<Option<u64>, DbError> {
        let txn = self.db.begin().await?;

        let removed_hashes = delete_many_on(&txn, &HashFilter::for_team(id)).await?;
        let result = Teams::delete_by_id(id.to_string()).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        txn.commit().await?;
        Ok(Some(removed_hashes))
    }
}
