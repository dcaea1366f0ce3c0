//! Prometheus metrics for the game.
//!
//! # Panics
//!
//! Metric registration uses `unwrap()`. Registration only fails on duplicate
//! metric names, which is a programming error caught at first use.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_gauge, register_int_counter, register_int_counter_vec,
    CounterVec, Encoder, Gauge, IntCounter, IntCounterVec, TextEncoder,
};

use crate::error::TelemetryResult;

/// Rounds fully resolved.
pub static ROUNDS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!("mmg_rounds_total", "Total rounds resolved").unwrap()
});

/// Units traded through quote matching.
/// Labels: role (player/bot), side (buy/sell)
pub static FILLS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "mmg_fills_total",
        "Units traded through quote matching",
        &["role", "side"]
    )
    .unwrap()
});

/// Sides where both quotes were equal.
pub static TIES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("mmg_ties_total", "Quote ties with no trade", &["side"]).unwrap()
});

/// Forced trades from position limit breaches.
pub static FORCED_TRADES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "mmg_forced_trades_total",
        "Forced trades from position limit breaches",
        &["role", "side"]
    )
    .unwrap()
});

/// Cash moved by trades, by role and side.
pub static TRADED_NOTIONAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "mmg_traded_notional",
        "Cash moved by matched and forced trades",
        &["role", "side"]
    )
    .unwrap()
});

/// Most recent stock price.
pub static LAST_PRICE: Lazy<Gauge> =
    Lazy::new(|| register_gauge!("mmg_last_price", "Most recent stock price").unwrap());

/// Finished games by outcome.
pub static GAMES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!("mmg_games_total", "Finished games by outcome", &["outcome"])
        .unwrap()
});

/// Metrics facade for easy access.
pub struct Metrics;

impl Metrics {
    /// Record a resolved round.
    pub fn round_resolved() {
        ROUNDS_TOTAL.inc();
    }

    /// Record a matched fill.
    pub fn fill(role: &str, side: &str, notional: f64) {
        FILLS_TOTAL.with_label_values(&[role, side]).inc();
        TRADED_NOTIONAL
            .with_label_values(&[role, side])
            .inc_by(notional.abs());
    }

    /// Record a tie on one side.
    pub fn tie(side: &str) {
        TIES_TOTAL.with_label_values(&[side]).inc();
    }

    /// Record a forced trade.
    pub fn forced_trade(role: &str, side: &str, notional: f64) {
        FORCED_TRADES_TOTAL.with_label_values(&[role, side]).inc();
        TRADED_NOTIONAL
            .with_label_values(&[role, side])
            .inc_by(notional.abs());
    }

    /// Record the latest stock price.
    pub fn price(price: f64) {
        LAST_PRICE.set(price);
    }

    /// Record a finished game.
    pub fn game_finished(outcome: &str) {
        GAMES_TOTAL.with_label_values(&[outcome]).inc();
    }

    /// Render every registered metric in the Prometheus text format.
    pub fn render() -> TelemetryResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&prometheus::gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}
