// Handlers for crypto hash endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{
    CryptoHashCreate, CryptoHashData, CryptoHashUpdate, HashesQuery, MessageResponse,
};
use crate::services::hash_service;

/// Handler for POST /api/hashes
pub async fn create_hash(
    State(state): State<AppState>,
    Json(payload): Json<CryptoHashCreate>,
) -> ApiResult<Json<CryptoHashData>> {
    let hash = hash_service::create_hash(&state, payload).await?;
    Ok(Json(hash))
}

/// Handler for GET /api/hashes - Lists hashes, optionally for one `team_id`
pub async fn get_hashes(
    State(state): State<AppState>,
    Query(params): Query<HashesQuery>,
) -> ApiResult<Json<Vec<CryptoHashData>>> {
    let hashes = hash_service::list_hashes(&state, params.team_id.as_deref()).await?;
    Ok(Json(hashes))
}

/// Handler for GET /api/hashes/{hash_id}
pub async fn get_hash(
    State(state): State<AppState>,
    Path(hash_id): Path<String>,
) -> ApiResult<Json<CryptoHashData>> {
    let hash = hash_service::get_hash(&state, &hash_id).await?;
    Ok(Json(hash))
}

/// Handler for PUT /api/hashes/{hash_id}
pub async fn update_hash(
    State(state): State<AppState>,
    Path(hash_id): Path<String>,
    Json(payload): Json<CryptoHashUpdate>,
) -> ApiResult<Json<CryptoHashData>> {
    let hash = hash_service::update_hash(&state, &hash_id, payload).await?;
    Ok(Json(hash))
}

/// Handler for DELETE /api/hashes/{hash_id}
pub async fn delete_hash(
    State(state): State<AppState>,
    Path(hash_id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let response = hash_service::delete_hash(&state, &hash_id).await?;
    Ok(Json(response))
}
