use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::db::error::DbError;
use crate::entity::crypto_hashes::{ActiveModel, Column, Model};
use crate::entity::prelude::CryptoHashes;

/// Filter for hash listings and bulk deletes
#[derive(Debug, Clone, Default)]
pub struct HashFilter {
    pub team_id: Option<String>,
}

impl HashFilter {
    pub fn for_team(team_id: impl Into<String>) -> Self {
        Self {
            team_id: Some(team_id.into()),
        }
    }
}

/// Repository for crypto hash persistence
#[derive(Clone)]
pub struct HashRepository {
    db: DatabaseConnection,
}

impl HashRepository {
    /// Create a new hash repository
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a new hash record
    pub async fn save(&self, hash: ActiveModel) -> Result<Model, DbError> {
        hash.insert(&self.db).await.map_err(Into::into)
    }

    /// Persist the changed columns of an existing hash record
    pub async fn update(&self, hash: ActiveModel) -> Result<Model, DbError> {
        hash.update(&self.db).await.map_err(Into::into)
    }

    /// Find a hash record by id
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Model>, DbError> {
        CryptoHashes::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// List hash records in creation order
    pub async fn find_all(&self, filter: &HashFilter) -> Result<Vec<Model>, DbError> {
        let mut query = CryptoHashes::find();

        if let Some(team_id) = &filter.team_id {
            query = query.filter(Column::TeamId.eq(team_id.as_str()));
        }

        query
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Delete a single hash record, returning whether it existed
    pub async fn delete(&self, id: &str) -> Result<bool, DbError> {
        let result = CryptoHashes::delete_by_id(id.to_string())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Delete every hash record matching the filter
    pub async fn delete_many(&self, filter: &HashFilter) -> Result<u64, DbError> {
        delete_many_on(&self.db, filter).await.map_err(Into::into)
    }
}

/// Bulk delete on any connection, so callers can run it inside a transaction
pub(crate) async fn delete_many_on<C>(conn: &C, filter: &HashFilter) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    let mut query = CryptoHashes::delete_many();

    if let Some(team_id) = &filter.team_id {
        query = query.filter(Column::TeamId.eq(team_id.as_str()));
    }

    let result = query.exec(conn).await?;
    Ok(result.rows_affected)
}
