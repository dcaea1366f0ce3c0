//! Stock price generation for the market-making game.
//!
//! Prices follow a single-step geometric Brownian motion whose drift is
//! itself sampled each round:
//!
//! ```text
//! μ ~ N(μ̄, μ_std),  Z ~ N(0, 1)
//! S_t = S_last · exp((μ − σ²/2)·dt + σ·√dt·Z)
//! ```
//!
//! Randomness comes from a pluggable [`NormalSource`] so sessions can be
//! replayed from a seed and tests can script exact draws.

pub mod error;
pub mod price_process;
pub mod random;

pub use error::{FeedError, FeedResult};
pub use price_process::{GbmParams, PriceGenerator};
pub use random::{NormalSource, ScriptedNormalSource, SeededNormalSource};
