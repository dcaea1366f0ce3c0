//! Position limit enforcement and end-of-game liquidation.
//!
//! - `PositionLimiter`: one forced, unfavourable trade per round while a
//!   participant's inventory is beyond the limit
//! - `liquidate`: closes the whole inventory at the final price

pub mod config;
pub mod limiter;
pub mod liquidation;

pub use config::LimiterConfig;
pub use limiter::{enforce_limit, LimitRegion, PositionLimiter};
pub use liquidation::{liquidate, Liquidation};
