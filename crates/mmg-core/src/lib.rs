//! Core domain types for the market-making game.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `Price`: exact two-decimal money values backed by `rust_decimal`
//! - `Quote`, `TradeSide`: what a participant offers each round
//! - `Participant`, `ParticipantRole`: balance and inventory of player and bot
//! - `PriceHistory`: append-only stock price series
//! - `GameConfig`, `Difficulty`: immutable session parameters
//! - `GameOutcome`: end-of-game classification

pub mod config;
pub mod decimal;
pub mod error;
pub mod outcome;
pub mod types;

pub use config::{Difficulty, GameConfig};
pub use decimal::Price;
pub use error::{CoreError, Result};
pub use outcome::GameOutcome;
pub use types::{Participant, ParticipantRole, PriceHistory, Quote, TradeSide};
