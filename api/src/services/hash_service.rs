// Crypto hash lifecycle business logic

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use tracing::{info, warn};
use uuid::Uuid;

use crate::db::HashFilter;
use crate::entity::crypto_hashes;
use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{CryptoHashCreate, CryptoHashData, CryptoHashUpdate, MessageResponse};
use crate::services::validation;

pub async fn create_hash(state: &AppState, payload: CryptoHashCreate) -> ApiResult<CryptoHashData> {
    // The owning team has to exist before anything else is looked at
    if state
        .repositories
        .team
        .find_by_id(&payload.team_id)
        .await?
        .is_none()
    {
        let err = ApiError::Validation(format!("Team {} does not exist", payload.team_id));
        log_rejection(&err);
        return Err(err);
    }

    let hash_value = validation::hash_value(&payload.hash_value).inspect_err(log_rejection)?;
    let token_amount = validation::token_amount(payload.token_amount).inspect_err(log_rejection)?;
    validation::exchange_rate(payload.currency, payload.exchange_rate)
        .inspect_err(log_rejection)?;

    let now = Utc::now();
    let hash = crypto_hashes::ActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        team_id: Set(payload.team_id),
        hash_value: Set(hash_value),
        token_amount: Set(token_amount),
        currency: Set(payload.currency),
        exchange_rate: Set(payload.exchange_rate),
        created_at: Set(now),
        updated_at: Set(now),
    };

    let hash = state.repositories.hash.save(hash).await?;
    info!(
        "Created {} hash {} for team {}",
        hash.currency, hash.id, hash.team_id
    );

    Ok(hash.into())
}

pub async fn list_hashes(state: &AppState, team_id: Option<&str>) -> ApiResult<Vec<CryptoHashData>> {
    let filter = match team_id.map(str::trim) {
        Some(team_id) if !team_id.is_empty() => HashFilter::for_team(team_id),
        _ => HashFilter::default(),
    };

    let hashes = state.repositories.hash.find_all(&filter).await?;
    Ok(hashes.into_iter().map(CryptoHashData::from).collect())
}

pub async fn get_hash(state: &AppState, hash_id: &str) -> ApiResult<CryptoHashData> {
    find_hash(state, hash_id).await.map(CryptoHashData::from)
}

/// Applies a partial update. The record that would result must still be
/// valid: a RUB record keeps needing a usable rate, either sent now or
/// already stored.
pub async fn update_hash(
    state: &AppState,
    hash_id: &str,
    payload: CryptoHashUpdate,
) -> ApiResult<CryptoHashData> {
    let existing = find_hash(state, hash_id).await?;
    if payload.is_empty() {
        return Ok(existing.into());
    }

    let currency = payload.currency.unwrap_or(existing.currency);
    let exchange_rate = payload.exchange_rate.or(existing.exchange_rate);
    validation::exchange_rate(currency, exchange_rate).inspect_err(log_rejection)?;

    let mut hash: crypto_hashes::ActiveModel = existing.into();

    if let Some(value) = &payload.hash_value {
        hash.hash_value = Set(validation::hash_value(value).inspect_err(log_rejection)?);
    }
    if let Some(amount) = payload.token_amount {
        hash.token_amount = Set(validation::token_amount(amount).inspect_err(log_rejection)?);
    }
    hash.currency = Set(currency);
    hash.exchange_rate = Set(exchange_rate);
    hash.updated_at = Set(Utc::now());

    let hash = state.repositories.hash.update(hash).await?;
    info!("Updated hash {}", hash.id);

    Ok(hash.into())
}

pub async fn delete_hash(state: &AppState, hash_id: &str) -> ApiResult<MessageResponse> {
    if !state.repositories.hash.delete(hash_id).await? {
        return Err(hash_not_found());
    }

    info!("Deleted hash {}", hash_id);
    Ok(MessageResponse::new("Hash deleted successfully"))
}

async fn find_hash(state: &AppState, hash_id: &str) -> ApiResult<crypto_hashes::Model> {
    state
        .repositories
        .hash
        .find_by_id(hash_id)
        .await?
        .ok_or_else(hash_not_found)
}

fn hash_not_found() -> ApiError {
    ApiError::NotFound("Hash not found".into())
}

fn log_rejection(err: &ApiError) {
    warn!("Rejected hash payload: {}", err);
}
