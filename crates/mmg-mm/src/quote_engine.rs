//! Bot quote calculation engine.
//!
//! Computes the bot's bid/ask from:
//! - Last stock price (centre of the quote)
//! - Volatility-scaled spread, shrinking linearly towards the last round
//! - Inventory skew (long pushes both quotes down, short pushes them up)
//! - Trend skew (rising prices push both quotes up)
//!
//! Quotes never cross the market: the bid always ends below the last price
//! and the ask above it.

use mmg_core::{Price, PriceHistory, Quote};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{QuoterConfig, SkewModel};
use crate::trend::TrendStats;

/// Inventory sensitivity of the branching model.
const BRANCHING_INVENTORY_SENSITIVITY: Decimal = Decimal::TWO;

/// Calculate the bot's quote for one round.
///
/// # Arguments
/// * `history` - Price history; the last entry is the current price
/// * `inventory` - Bot's net inventory (positive = long)
/// * `position_limit` - Maximum absolute inventory
/// * `volatility` - Stock volatility σ
/// * `round_index` - Current round, starting at 1
/// * `total_rounds` - Number of rounds in the game
/// * `config` - Quoter configuration
pub fn compute_bot_quote(
    history: &PriceHistory,
    inventory: i64,
    position_limit: u32,
    volatility: Decimal,
    round_index: u32,
    total_rounds: u32,
    config: &QuoterConfig,
) -> Quote {
    let last = history.last().inner();
    let trend = TrendStats::from_history(history, config.trend_window);

    let (bid, ask) = match config.skew_model {
        SkewModel::Additive => {
            // Linear decay: full spread in round 1, 1/T of it in the last round
            let total = Decimal::from(total_rounds.max(1));
            let remaining = Decimal::from((total_rounds + 1).saturating_sub(round_index));
            let spread = config.spread_multiplier * volatility * (remaining / total);
            let half = spread / Decimal::TWO;

            let inv_factor = if position_limit == 0 {
                Decimal::ZERO
            } else {
                Decimal::from(inventory) / Decimal::from(position_limit)
                    * config.inventory_sensitivity
            };
            let trend_factor = trend.relative_change() * config.trend_sensitivity;

            let shift = half * (trend_factor - inv_factor);

            debug!(
                round = round_index,
                %spread,
                %inv_factor,
                %trend_factor,
                "Bot quote adjustments"
            );

            (last - half + shift, last + half + shift)
        }
        SkewModel::Branching => {
            let spread = config.spread_multiplier * volatility;
            let half = spread / Decimal::TWO;

            let inv_adj = if position_limit == 0 {
                Decimal::ZERO
            } else {
                Decimal::from(inventory.abs()) / Decimal::from(position_limit)
                    * BRANCHING_INVENTORY_SENSITIVITY
            };
            let trend_adj = trend.relative_change();
            let magnitude = inv_adj * trend_adj;

            // Long: follow the move to sell into it. Short: lean against it.
            let shift = match (inventory.signum(), trend.is_rising(), trend.is_falling()) {
                (1, true, _) | (-1, _, true) => magnitude,
                (1, _, true) | (-1, true, _) => -magnitude,
                _ => Decimal::ZERO,
            };

            debug!(
                round = round_index,
                %spread,
                %inv_adj,
                %trend_adj,
                %shift,
                "Bot quote adjustments (branching)"
            );

            (last - half + shift, last + half + shift)
        }
    };

    clamp_to_market(Price::new(bid), Price::new(ask), history.last())
}

/// Round to cents, then pull any quote that reaches the market back by one tick.
fn clamp_to_market(bid: Price, ask: Price, market: Price) -> Quote {
    let mut bid = bid.round_cents();
    let mut ask = ask.round_cents();

    if bid >= market {
        bid = market - Price::TICK;
    }
    if ask <= market {
        ask = market + Price::TICK;
    }

    Quote::new(bid, ask)
}

/// Bot quoting strategy bound to its configuration.
#[derive(Debug, Clone, Default)]
pub struct BotQuoter {
    config: QuoterConfig,
}

impl BotQuoter {
    pub fn new(config: QuoterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QuoterConfig {
        &self.config
    }

    /// Quote for `round_index` (1-based) of `total_rounds`.
    pub fn quote(
        &self,
        history: &PriceHistory,
        inventory: i64,
        position_limit: u32,
        volatility: Decimal,
        round_index: u32,
        total_rounds: u32,
    ) -> Quote {
        compute_bot_quote(
            history,
            inventory,
            position_limit,
            volatility,
            round_index,
            total_rounds,
            &self.config,
        )
    }
}
