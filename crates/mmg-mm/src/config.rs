//! Bot quoting configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How inventory and trend adjustments are combined.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkewModel {
    /// Spread decays over the game; inventory and trend skews are added
    /// independently, each scaled by half the spread.
    #[default]
    Additive,
    /// Fixed spread; a single shift of `inventory_adj × trend_adj` whose
    /// direction depends on the sign of inventory and of the last move.
    Branching,
}

/// Bot quoting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoterConfig {
    /// Adjustment combination model.
    #[serde(default)]
    pub skew_model: SkewModel,

    /// Spread = multiplier × σ (before time decay).
    #[serde(default = "default_spread_multiplier")]
    pub spread_multiplier: Decimal,

    /// Inventory skew sensitivity (additive model).
    /// Full long inventory shifts both quotes down by this many half-spreads.
    #[serde(default = "default_inventory_sensitivity")]
    pub inventory_sensitivity: Decimal,

    /// Trend skew sensitivity (additive model).
    #[serde(default = "default_trend_sensitivity")]
    pub trend_sensitivity: Decimal,

    /// Number of recent prices in the moving average.
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,
}

impl Default for QuoterConfig {
    fn default() -> Self {
        Self {
            skew_model: SkewModel::default(),
            spread_multiplier: default_spread_multiplier(),
            inventory_sensitivity: default_inventory_sensitivity(),
            trend_sensitivity: default_trend_sensitivity(),
            trend_window: default_trend_window(),
        }
    }
}

fn default_spread_multiplier() -> Decimal {
    Decimal::TEN
}
fn default_inventory_sensitivity() -> Decimal {
    Decimal::ONE
}
fn default_trend_sensitivity() -> Decimal {
    Decimal::new(5, 0)
}
fn default_trend_window() -> usize {
    3
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = QuoterConfig::default();
        assert_eq!(config.skew_model, SkewModel::Additive);
        assert_eq!(config.spread_multiplier, dec!(10));
        assert_eq!(config.inventory_sensitivity, dec!(1));
        assert_eq!(config.trend_sensitivity, dec!(5));
        assert_eq!(config.trend_window, 3);
    }

    #[test]
    fn test_config_serde_defaults() {
        let toml_str = r#"
skew_model = "branching"
"#;
        let config: QuoterConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.skew_model, SkewModel::Branching);
        assert_eq!(config.spread_multiplier, dec!(10));
        assert_eq!(config.trend_window, 3);
    }
}
