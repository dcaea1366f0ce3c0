//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] mmg_core::CoreError),

    #[error("Price feed error: {0}")]
    Feed(#[from] mmg_feed::FeedError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] mmg_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input closed before the game finished")]
    InputClosed,

    #[error("Quote provider has no quote for round {0}")]
    NoQuote(u32),

    #[error("All {0} rounds have already been played")]
    GameOver(u32),

    #[error("Game cannot finish with {0} round(s) still to play")]
    RoundsRemaining(u32),
}

pub type AppResult<T> = Result<T, AppError>;
