//! Round trade matching for the market-making game.
//!
//! Each round both participants post one bid and one ask. The bid side and
//! the ask side are matched independently:
//! - Higher bid buys one unit at its own bid
//! - Lower ask sells one unit at its own ask
//! - Exact ties trade nothing

pub mod matching;
pub mod trade_log;

pub use matching::{resolve_round, Resolution};
pub use trade_log::{TradeEvent, TradeLog};
