//! Lot summary calculation.
//!
//! Token amounts are normalised per currency (RUB amounts are multiplied by
//! their exchange rate), then split into whole lots at the team's price per
//! lot. The calculation never fails: a RUB record without a rate contributes
//! nothing and a zero price yields zero lots.

use crate::entity::crypto_hashes::{self, Currency};
use crate::entity::teams;
use crate::models::TeamSummary;

/// Aggregated token totals per currency
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokenTotals {
    pub rub: f64,
    pub usdt: f64,
}

impl TokenTotals {
    /// Totals over a set of hash records, in any order
    pub fn from_hashes(hashes: &[crypto_hashes::Model]) -> Self {
        hashes.iter().fold(Self::default(), Self::add)
    }

    fn add(self, hash: &crypto_hashes::Model) -> Self {
        match hash.currency {
            Currency::Rub => Self {
                rub: self.rub + hash.token_amount * hash.exchange_rate.unwrap_or(0.0),
                ..self
            },
            Currency::Usdt => Self {
                usdt: self.usdt + hash.token_amount,
                ..self
            },
        }
    }
}

/// Whole lots, remainder and shortfall for one currency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LotBreakdown {
    pub tokens: f64,
    pub lots_raw: f64,
    pub lots: i64,
    pub remainder: f64,
    pub needed_for_next_lot: f64,
}

impl LotBreakdown {
    pub fn compute(tokens: f64, price_per_lot: f64) -> Self {
        // Zero or NaN price: lots are undefined and reported as zero, remainder too
        if price_per_lot.is_nan() || price_per_lot <= 0.0 {
            return Self {
                tokens,
                lots_raw: 0.0,
                lots: 0,
                remainder: 0.0,
                needed_for_next_lot: price_per_lot,
            };
        }

        let lots_raw = tokens / price_per_lot;
        // Saturates at i64::MAX for totals beyond the integer range
        let lots = lots_raw.floor() as i64;
        // Taken from the float totals so it stays in [0, price) even when lots saturate
        let remainder = tokens.rem_euclid(price_per_lot);
        let needed_for_next_lot = if remainder > 0.0 {
            price_per_lot - remainder
        } else {
            price_per_lot
        };

        Self {
            tokens,
            lots_raw,
            lots,
            remainder,
            needed_for_next_lot,
        }
    }
}

/// Reduce a team and its hash records to a lot summary
pub fn summarize(team: &teams::Model, hashes: &[crypto_hashes::Model]) -> TeamSummary {
    let totals = TokenTotals::from_hashes(hashes);
    let rub = LotBreakdown::compute(totals.rub, team.rub_price_per_lot);
    let usdt = LotBreakdown::compute(totals.usdt, team.usdt_price_per_lot);

    TeamSummary {
        team_id: team.id.clone(),
        team_name: team.name.clone(),
        rub_tokens: rub.tokens,
        usdt_tokens: usdt.tokens,
        rub_lots_raw: rub.lots_raw,
        usdt_lots_raw: usdt.lots_raw,
        rub_lots: rub.lots,
        usdt_lots: usdt.lots,
        total_lots: rub.lots.saturating_add(usdt.lots),
        rub_remainder: rub.remainder,
        usdt_remainder: usdt.remainder,
        rub_needed_for_next_lot: rub.needed_for_next_lot,
        usdt_needed_for_next_lot: usdt.needed_for_next_lot,
    }
}
