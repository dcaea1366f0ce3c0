//! Bot market-making strategy for the game.
//!
//! Provides the bot's per-round quote:
//! - Volatility-scaled spread that tightens as the game progresses
//! - Inventory skew (shift quotes to shed exposure)
//! - Trend skew from a short moving average and the last price change
//!
//! # Architecture
//!
//! ```text
//! PriceHistory ─┬─ TrendStats: moving average + rate of change
//!               └─ BotQuoter.quote(): spread → inventory skew → trend skew
//!                                     → no-cross clamp → round to cents
//! ```

pub mod config;
pub mod quote_engine;
pub mod trend;

pub use config::{QuoterConfig, SkewModel};
pub use quote_engine::{compute_bot_quote, BotQuoter};
pub use trend::TrendStats;
