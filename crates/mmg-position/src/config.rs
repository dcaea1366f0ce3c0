//! Forced-trade pricing configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Penalty prices applied when a position limit is breached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimiterConfig {
    /// Forced sale price as a fraction of the market price (over-long).
    #[serde(default = "default_forced_sale_ratio")]
    pub forced_sale_ratio: Decimal,

    /// Forced buy-back price as a multiple of the market price (over-short).
    #[serde(default = "default_forced_buy_ratio")]
    pub forced_buy_ratio: Decimal,
}

impl Default for LimiterConfig {
    fn default() -> Self {
        Self {
            forced_sale_ratio: default_forced_sale_ratio(),
            forced_buy_ratio: default_forced_buy_ratio(),
        }
    }
}

fn default_forced_sale_ratio() -> Decimal {
    Decimal::new(6, 1) // 0.6 = 40% under market
}
fn default_forced_buy_ratio() -> Decimal {
    Decimal::new(14, 1) // 1.4 = 40% over market
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config() {
        let config = LimiterConfig::default();
        assert_eq!(config.forced_sale_ratio, dec!(0.6));
        assert_eq!(config.forced_buy_ratio, dec!(1.4));
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: LimiterConfig = toml::from_str("forced_sale_ratio = 0.5").unwrap();
        assert_eq!(config.forced_sale_ratio, dec!(0.5));
        assert_eq!(config.forced_buy_ratio, dec!(1.4));
    }
}
