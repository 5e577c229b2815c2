use chrono::{DateTime, NaiveDateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Deserializer};
use std::error::Error;
use std::path::Path;
use tracing::{info, warn};

use hashlots_api::db::{DbError, Repositories};
use hashlots_api::entity::crypto_hashes::{self, Currency};
use hashlots_api::entity::teams;
use hashlots_api::error::ApiResult;
use hashlots_api::services::validation;

use crate::commands::connect;

/// Export produced by the document-store deployment
#[derive(Debug, Default, Deserialize)]
pub struct ImportFile {
    #[serde(default)]
    pub teams: Vec<ImportTeam>,
    #[serde(default)]
    pub crypto_hashes: Vec<ImportHash>,
}

#[derive(Debug, Deserialize)]
pub struct ImportTeam {
    pub id: String,
    pub name: String,
    pub rub_price_per_lot: f64,
    pub usdt_price_per_lot: f64,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct ImportHash {
    pub id: String,
    pub team_id: String,
    pub hash_value: String,
    pub token_amount: f64,
    pub currency: Currency,
    #[serde(default)]
    pub exchange_rate: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Counts of what an import run did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub teams_imported: usize,
    pub teams_skipped: usize,
    pub teams_invalid: usize,
    pub hashes_imported: usize,
    pub hashes_skipped: usize,
    pub hashes_orphaned: usize,
    pub hashes_invalid: usize,
}

impl ImportTeam {
    /// Name and prices under the same rules the API applies
    fn validated(&self) -> ApiResult<(String, f64, f64)> {
        Ok((
            validation::team_name(&self.name)?,
            validation::price_per_lot("rub_price_per_lot", self.rub_price_per_lot)?,
            validation::price_per_lot("usdt_price_per_lot", self.usdt_price_per_lot)?,
        ))
    }
}

impl ImportHash {
    /// Hash value and amount under the same rules the API applies.
    /// A missing RUB rate is tolerated; such records count as zero tokens.
    fn validated(&self) -> ApiResult<(String, f64)> {
        Ok((
            validation::hash_value(&self.hash_value)?,
            validation::token_amount(self.token_amount)?,
        ))
    }
}

/// Execute the import command
pub async fn execute(file: &Path) -> Result<(), Box<dyn Error>> {
    let data = read_export(file).await?;
    info!(
        "Read {} teams and {} hashes from {}",
        data.teams.len(),
        data.crypto_hashes.len(),
        file.display()
    );

    let connection = connect().await?;
    let report = import(&connection, data).await?;

    info!(
        "Imported {} teams ({} already present, {} invalid)",
        report.teams_imported, report.teams_skipped, report.teams_invalid
    );
    info!(
        "Imported {} hashes ({} already present, {} without a team, {} invalid)",
        report.hashes_imported,
        report.hashes_skipped,
        report.hashes_orphaned,
        report.hashes_invalid
    );

    Ok(())
}

/// Load and parse an export file
pub async fn read_export(file: &Path) -> Result<ImportFile, Box<dyn Error>> {
    let raw = tokio::fs::read_to_string(file).await?;
    Ok(serde_json::from_str(&raw)?)
}

/// Copy teams, then hashes, into the store. Records whose id already exists
/// are left alone, so the import can be re-run safely. Records failing
/// validation are skipped and counted.
pub async fn import(conn: &DatabaseConnection, data: ImportFile) -> Result<ImportReport, DbError> {
    let repos = Repositories::new(conn.clone());
    let mut report = ImportReport::default();
    let now = Utc::now();

    for team in data.teams {
        if repos.team.find_by_id(&team.id).await?.is_some() {
            info!("Team {} already exists, skipping", team.id);
            report.teams_skipped += 1;
            continue;
        }
        let (name, rub_price, usdt_price) = match team.validated() {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Team {} is invalid, skipping: {}", team.id, e);
                report.teams_invalid += 1;
                continue;
            }
        };

        let created_at = team.created_at.unwrap_or(now);
        repos
            .team
            .save(teams::ActiveModel {
                id: Set(team.id),
                name: Set(name),
                rub_price_per_lot: Set(rub_price),
                usdt_price_per_lot: Set(usdt_price),
                created_at: Set(created_at),
                updated_at: Set(team.updated_at.unwrap_or(created_at)),
            })
            .await?;
        report.teams_imported += 1;
    }

    for hash in data.crypto_hashes {
        if repos.hash.find_by_id(&hash.id).await?.is_some() {
            info!("Hash {} already exists, skipping", hash.id);
            report.hashes_skipped += 1;
            continue;
        }
        if repos.team.find_by_id(&hash.team_id).await?.is_none() {
            warn!("Hash {} references missing team {}, skipping", hash.id, hash.team_id);
            report.hashes_orphaned += 1;
            continue;
        }
        let (hash_value, token_amount) = match hash.validated() {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Hash {} is invalid, skipping: {}", hash.id, e);
                report.hashes_invalid += 1;
                continue;
            }
        };
        if hash.currency == Currency::Rub && hash.exchange_rate.is_none() {
            warn!("RUB hash {} has no exchange rate and will count as zero", hash.id);
        }

        let created_at = hash.created_at.unwrap_or(now);
        repos
            .hash
            .save(crypto_hashes::ActiveModel {
                id: Set(hash.id),
                team_id: Set(hash.team_id),
                hash_value: Set(hash_value),
                token_amount: Set(token_amount),
                currency: Set(hash.currency),
                exchange_rate: Set(hash.exchange_rate),
                created_at: Set(created_at),
                updated_at: Set(hash.updated_at.unwrap_or(created_at)),
            })
            .await?;
        report.hashes_imported += 1;
    }

    Ok(report)
}

/// Accepts RFC 3339 timestamps as well as the zone-less ISO form the
/// document store wrote (taken as UTC)
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => parse_timestamp(&s).map(Some).map_err(serde::de::Error::custom),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid timestamp: {}", raw))
}
