//! Position limit state machine.
//!
//! ```text
//! inventory >  limit  → OverLong:  sell 1 unit at forced_sale_ratio × market
//! inventory < -limit  → OverShort: buy 1 unit at forced_buy_ratio × market
//! otherwise           → WithinLimit: no-op
//! ```
//!
//! Only one unit is corrected per call. A breach of two or more units stays
//! partly open until later rounds.

use mmg_core::{Participant, Price, TradeSide};
use mmg_executor::TradeEvent;
use tracing::warn;

use crate::config::LimiterConfig;

/// Where an inventory sits relative to the position limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitRegion {
    WithinLimit,
    OverLong,
    OverShort,
}

impl LimitRegion {
    pub fn classify(inventory: i64, position_limit: u32) -> Self {
        let limit = i64::from(position_limit);
        if inventory > limit {
            Self::OverLong
        } else if inventory < -limit {
            Self::OverShort
        } else {
            Self::WithinLimit
        }
    }
}

/// Apply at most one forced correction to `participant`.
///
/// Returns the updated participant and the forced trade, if one happened.
/// Forced trades settle in whole cents: the raw penalty price is applied
/// and the new balance is then rounded to two places, i.e.
/// `round(new_balance, 2)`. A forced sale at 10.01 adds 6.01 to the
/// balance, while the event keeps the raw 6.006.
pub fn enforce_limit(
    mut participant: Participant,
    market: Price,
    position_limit: u32,
    config: &LimiterConfig,
) -> (Participant, Option<TradeEvent>) {
    let (side, price) = match LimitRegion::classify(participant.inventory, position_limit) {
        LimitRegion::WithinLimit => return (participant, None),
        LimitRegion::OverLong => (TradeSide::Sell, market * config.forced_sale_ratio),
        LimitRegion::OverShort => (TradeSide::Buy, market * config.forced_buy_ratio),
    };

    participant.trade(side, price);
    participant.balance = participant.balance.round_dp(2);

    warn!(
        role = %participant.role,
        %side,
        %price,
        %market,
        inventory = participant.inventory,
        balance = %participant.balance,
        "Position limit breached, forced trade"
    );

    (
        participant,
        Some(TradeEvent::Forced {
            role: participant.role,
            side,
            price,
        }),
    )
}

/// Position limit enforcement bound to a session's limit.
#[derive(Debug, Clone)]
pub struct PositionLimiter {
    position_limit: u32,
    config: LimiterConfig,
}

impl PositionLimiter {
    pub fn new(position_limit: u32, config: LimiterConfig) -> Self {
        Self {
            position_limit,
            config,
        }
    }

    pub fn position_limit(&self) -> u32 {
        self.position_limit
    }

    pub fn enforce(
        &self,
        participant: Participant,
        market: Price,
    ) -> (Participant, Option<TradeEvent>) {
        enforce_limit(participant, market, self.position_limit, &self.config)
    }
}
