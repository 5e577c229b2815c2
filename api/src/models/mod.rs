// API request/response models
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{crypto_hashes, crypto_hashes::Currency, teams};

/// Query parameters for GET /api/teams
#[derive(Debug, Deserialize, Default)]
pub struct TeamsQuery {
    pub search: Option<String>,
}

/// Query parameters for GET /api/hashes
#[derive(Debug, Deserialize, Default)]
pub struct HashesQuery {
    pub team_id: Option<String>,
}

/// Request body for POST /api/teams
#[derive(Debug, Clone, Deserialize)]
pub struct TeamCreate {
    pub name: String,
    pub rub_price_per_lot: f64,
    pub usdt_price_per_lot: f64,
}

/// Request body for PUT /api/teams/{team_id}; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub rub_price_per_lot: Option<f64>,
    pub usdt_price_per_lot: Option<f64>,
}

impl TeamUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.rub_price_per_lot.is_none() && self.usdt_price_per_lot.is_none()
    }
}

/// Request body for POST /api/hashes
#[derive(Debug, Clone, Deserialize)]
pub struct CryptoHashCreate {
    pub team_id: String,
    pub hash_value: String,
    pub token_amount: f64,
    pub currency: Currency,
    #[serde(default)]
    pub exchange_rate: Option<f64>,
}

/// Request body for PUT /api/hashes/{hash_id}; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CryptoHashUpdate {
    pub hash_value: Option<String>,
    pub token_amount: Option<f64>,
    pub currency: Option<Currency>,
    pub exchange_rate: Option<f64>,
}

impl CryptoHashUpdate {
    pub fn is_empty(&self) -> bool {
        self.hash_value.is_none()
            && self.token_amount.is_none()
            && self.currency.is_none()
            && self.exchange_rate.is_none()
    }
}

/// Team as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct TeamData {
    pub id: String,
    pub name: String,
    pub rub_price_per_lot: f64,
    pub usdt_price_per_lot: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<teams::Model> for TeamData {
    fn from(team: teams::Model) -> Self {
        Self {
            id: team.id,
            name: team.name,
            rub_price_per_lot: team.rub_price_per_lot,
            usdt_price_per_lot: team.usdt_price_per_lot,
            created_at: team.created_at,
            updated_at: team.updated_at,
        }
    }
}

/// Crypto hash record as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct CryptoHashData {
    pub id: String,
    pub team_id: String,
    pub hash_value: String,
    pub token_amount: f64,
    pub currency: Currency,
    pub exchange_rate: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<crypto_hashes::Model> for CryptoHashData {
    fn from(hash: crypto_hashes::Model) -> Self {
        Self {
            id: hash.id,
            team_id: hash.team_id,
            hash_value: hash.hash_value,
            token_amount: hash.token_amount,
            currency: hash.currency,
            exchange_rate: hash.exchange_rate,
            created_at: hash.created_at,
            updated_at: hash.updated_at,
        }
    }
}

/// Lot summary for one team. Whole lots are integers, raw lots are not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team_id: String,
    pub team_name: String,
    pub rub_tokens: f64,
    pub usdt_tokens: f64,
    pub rub_lots_raw: f64,
    pub usdt_lots_raw: f64,
    pub rub_lots: i64,
    pub usdt_lots: i64,
    pub total_lots: i64,
    pub rub_remainder: f64,
    pub usdt_remainder: f64,
    pub rub_needed_for_next_lot: f64,
    pub usdt_needed_for_next_lot: f64,
}

/// Plain acknowledgement body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
