//! Market-making game: session orchestration and console front-end.
//!
//! Wires the engine crates into a playable game:
//! - `GameSession`: price generation → quotes → matching → limits, per round,
//!   then final liquidation and scoring
//! - `QuoteProvider` / `GameDisplay`: collaborators for player input and output
//! - Console implementations of both, plus an ASCII price chart
//! - `AppConfig` (TOML) and `Application` (the `mmg` binary)

pub mod app;
pub mod chart;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod provider;
pub mod session;

pub use app::{Application, RunOptions};
pub use config::{AppConfig, ConfigSource};
pub use console::Console;
pub use display::{ConsoleDisplay, GameDisplay, NullDisplay};
pub use error::{AppError, AppResult};
pub use provider::{QuoteProvider, ScriptedQuoteProvider};
pub use session::{GameSession, GameSummary, RoundContext, RoundReport};
