//! Application configuration.

use crate::error::{AppError, AppResult};
use mmg_core::config::{default_initial_balance, default_position_limit};
use mmg_core::{Difficulty, GameConfig, Price};
use mmg_mm::QuoterConfig;
use mmg_position::LimiterConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Game parameters. Anything left unset is asked for on the console
/// (difficulty, rounds) or derived from the round count.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSection {
    /// Difficulty level 1-3. Prompted for if unset.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Number of rounds. Prompted for if unset.
    #[serde(default)]
    pub num_rounds: Option<u32>,
    /// Starting stock price. Default: £10.00.
    #[serde(default)]
    pub initial_price: Option<Decimal>,
    /// Overrides the difficulty's volatility.
    #[serde(default)]
    pub volatility: Option<Decimal>,
    /// Mean of the per-round drift draw. Default: 0.02.
    #[serde(default)]
    pub drift_mean: Option<Decimal>,
    /// Standard deviation of the drift draw. Default: 0.01.
    #[serde(default)]
    pub drift_std: Option<Decimal>,
    /// Default: two below the number of rounds, at least 1.
    #[serde(default)]
    pub position_limit: Option<u32>,
    /// Default: initial price × (rounds + 1).
    #[serde(default)]
    pub initial_balance: Option<Decimal>,
    /// RNG seed for a reproducible price path.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Console output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print the rules before the first round. Default: true.
    #[serde(default = "default_true")]
    pub show_rules: bool,
    /// Draw an ASCII price chart at the end. Default: true.
    #[serde(default = "default_true")]
    pub show_chart: bool,
    /// Chart rows. Default: 10.
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
    /// Maximum chart columns (most recent prices). Default: 60.
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

fn default_true() -> bool {
    true
}

fn default_chart_height() -> usize {
    10
}

fn default_chart_width() -> usize {
    60
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_rules: true,
            show_chart: true,
            chart_height: default_chart_height(),
            chart_width: default_chart_width(),
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Config file read when neither `--config` nor `MMG_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    /// No file at `missing`; built-in defaults are in use.
    Defaults { missing: String },
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub game: GameSection,
    /// Bot quoting strategy.
    #[serde(default)]
    pub quoter: QuoterConfig,
    /// Forced trade ratios.
    #[serde(default)]
    pub limiter: LimiterConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `MMG_CONFIG`, else `config/default.toml`,
    /// else built-in defaults.
    ///
    /// Nothing is logged here since this runs before logging is set up;
    /// the returned `ConfigSource` says which case applied.
    pub fn load() -> AppResult<(Self, ConfigSource)> {
        let config_path =
            std::env::var("MMG_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if Path::new(&config_path).exists() {
            let config = Self::from_file(&config_path)?;
            Ok((config, ConfigSource::File(config_path)))
        } else {
            Ok((
                Self::default(),
                ConfigSource::Defaults {
                    missing: config_path,
                },
            ))
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }

    /// Resolve the session parameters once difficulty and round count are known.
    ///
    /// Explicit overrides in `[game]` win over the difficulty preset and the
    /// round-derived defaults.
    pub fn game_config(&self, difficulty: Difficulty, num_rounds: u32) -> AppResult<GameConfig> {
        let mut config = GameConfig::new(num_rounds, difficulty);
        let game = &self.game;

        if let Some(price) = game.initial_price {
            config.initial_price = Price::new(price);
            config.initial_balance = default_initial_balance(config.initial_price, num_rounds);
        }
        if let Some(volatility) = game.volatility {
            config.volatility = volatility;
        }
        if let Some(mean) = game.drift_mean {
            config.drift_mean = mean;
        }
        if let Some(std) = game.drift_std {
            config.drift_std = std;
        }
        config.position_limit = game
            .position_limit
            .unwrap_or_else(|| default_position_limit(num_rounds));
        if let Some(balance) = game.initial_balance {
            config.initial_balance = balance;
        }

        config.validate()?;
        Ok(config)
    }
}
