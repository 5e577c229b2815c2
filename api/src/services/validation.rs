// Payload checks applied before anything is written

use crate::entity::crypto_hashes::Currency;
use crate::error::{ApiError, ApiResult};

pub const RUB_RATE_REQUIRED: &str = "Exchange rate is required for RUB currency";

/// Trimmed, non-empty team name
pub fn team_name(name: &str) -> ApiResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("Team name must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Lot prices may be zero (lots disabled) but never negative
pub fn price_per_lot(field: &str, value: f64) -> ApiResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::Validation(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(value)
}

pub fn token_amount(value: f64) -> ApiResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::Validation(
            "token_amount must be a non-negative number".into(),
        ));
    }
    Ok(value)
}

pub fn hash_value(value: &str) -> ApiResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("hash_value must not be empty".into()));
    }
    Ok(trimmed.to_string())
}

/// Checks the rate a record would end up with.
///
/// RUB records need a finite rate above zero; a zero rate is rejected the same
/// way as a missing one. USDT records ignore the rate.
pub fn exchange_rate(currency: Currency, rate: Option<f64>) -> ApiResult<()> {
    match (currency, rate) {
        (Currency::Rub, Some(r)) if r.is_finite() && r > 0.0 => Ok(()),
        (Currency::Rub, _) => Err(ApiError::Validation(RUB_RATE_REQUIRED.into())),
        (Currency::Usdt, _) => Ok(()),
    }
}
