//! Session parameters.

use crate::error::{CoreError, Result};
use crate::Price;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty level selecting the stock volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Difficulty {
    /// Level 1: calm market.
    Easy,
    /// Level 2.
    #[default]
    Medium,
    /// Level 3: most volatile.
    Hard,
}

impl Difficulty {
    /// Stock volatility σ for this level.
    pub fn volatility(&self) -> Decimal {
        match self {
            Self::Easy => dec!(0.05),
            Self::Medium => dec!(0.1),
            Self::Hard => dec!(0.15),
        }
    }

    /// Numeric level (1 = easiest, 3 = hardest).
    pub fn level(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = CoreError;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::Easy),
            2 => Ok(Self::Medium),
            3 => Ok(Self::Hard),
            other => Err(CoreError::InvalidDifficulty(other)),
        }
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.level()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// Immutable parameters of one game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of quoting rounds.
    pub num_rounds: u32,
    /// Stock price before round 1.
    pub initial_price: Price,
    /// Volatility σ of the price process.
    pub volatility: Decimal,
    /// Mean of the per-round drift distribution.
    pub drift_mean: Decimal,
    /// Standard deviation of the per-round drift distribution.
    pub drift_std: Decimal,
    /// Maximum absolute inventory before a forced trade.
    pub position_limit: u32,
    /// Starting balance of both participants.
    pub initial_balance: Decimal,
}

pub const DEFAULT_INITIAL_PRICE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
pub const DEFAULT_DRIFT_MEAN: Decimal = Decimal::from_parts(2, 0, 0, false, 2);
pub const DEFAULT_DRIFT_STD: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

impl GameConfig {
    /// Build a session with the standard market parameters for `num_rounds`
    /// rounds at the given difficulty.
    pub fn new(num_rounds: u32, difficulty: Difficulty) -> Self {
        let initial_price = Price::new(DEFAULT_INITIAL_PRICE);
        Self {
            num_rounds,
            initial_price,
            volatility: difficulty.volatility(),
            drift_mean: DEFAULT_DRIFT_MEAN,
            drift_std: DEFAULT_DRIFT_STD,
            position_limit: default_position_limit(num_rounds),
            initial_balance: default_initial_balance(initial_price, num_rounds),
        }
    }

    /// Check the parameters describe a playable game.
    pub fn validate(&self) -> Result<()> {
        if self.num_rounds == 0 {
            return Err(CoreError::InvalidConfig(
                "num_rounds must be at least 1".to_string(),
            ));
        }
        if !self.initial_price.is_positive() || !self.initial_price.has_cents_precision() {
            return Err(CoreError::InvalidConfig(format!(
                "initial_price must be positive with at most 2 decimal places, got {}",
                self.initial_price.inner()
            )));
        }
        if self.volatility.is_sign_negative() {
            return Err(CoreError::InvalidConfig(format!(
                "volatility must not be negative, got {}",
                self.volatility
            )));
        }
        if self.drift_std.is_sign_negative() {
            return Err(CoreError::InvalidConfig(format!(
                "drift_std must not be negative, got {}",
                self.drift_std
            )));
        }
        if self.position_limit == 0 {
            return Err(CoreError::InvalidConfig(
                "position_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Position limit derived from the round count: two below the number of
/// rounds, never less than one unit.
pub fn default_position_limit(num_rounds: u32) -> u32 {
    num_rounds.saturating_sub(2).max(1)
}

/// Starting balance: enough to buy one unit per round plus one at the
/// initial price.
pub fn default_initial_balance(initial_price: Price, num_rounds: u32) -> Decimal {
    initial_price.inner() * Decimal::from(num_rounds + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_volatility() {
        assert_eq!(Difficulty::Easy.volatility(), dec!(0.05));
        assert_eq!(Difficulty::Medium.volatility(), dec!(0.1));
        assert_eq!(Difficulty::Hard.volatility(), dec!(0.15));
    }

    #[test]
    fn test_difficulty_from_level() {
        assert_eq!(Difficulty::try_from(1).unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::try_from(3).unwrap(), Difficulty::Hard);
        assert_eq!(
            Difficulty::try_from(4),
            Err(CoreError::InvalidDifficulty(4))
        );
        assert_eq!(u8::from(Difficulty::Medium), 2);
    }

    #[test]
    fn test_new_config_derives_limit_and_balance() {
        let config = GameConfig::new(5, Difficulty::Hard);
        assert_eq!(config.num_rounds, 5);
        assert_eq!(config.initial_price.inner(), dec!(10));
        assert_eq!(config.volatility, dec!(0.15));
        assert_eq!(config.drift_mean, dec!(0.02));
        assert_eq!(config.drift_std, dec!(0.01));
        assert_eq!(config.position_limit, 3);
        assert_eq!(config.initial_balance, dec!(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_games_keep_a_positive_limit() {
        assert_eq!(default_position_limit(1), 1);
        assert_eq!(default_position_limit(2), 1);
        assert_eq!(default_position_limit(3), 1);
        assert_eq!(default_position_limit(10), 8);
    }

    #[test]
    fn test_validate_rejects_bad_parameters() {
        let mut config = GameConfig::new(3, Difficulty::Easy);
        config.num_rounds = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::new(3, Difficulty::Easy);
        config.position_limit = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::new(3, Difficulty::Easy);
        config.volatility = dec!(-0.1);
        assert!(config.validate().is_err());

        let mut config = GameConfig::new(3, Difficulty::Easy);
        config.initial_price = Price::new(dec!(10.005));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_difficulty_serde_as_level() {
        #[derive(Deserialize)]
        struct Wrapper {
            difficulty: Difficulty,
        }
        let parsed: Wrapper = toml::from_str("difficulty = 3").unwrap();
        assert_eq!(parsed.difficulty, Difficulty::Hard);
        assert!(toml::from_str::<Wrapper>("difficulty = 7").is_err());
    }
}
