//! Precision-safe money type.
//!
//! Uses `rust_decimal` so balances and prices never pick up
//! floating-point drift across rounds.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

/// Number of decimal places every quoted or generated price carries.
pub const PRICE_DP: u32 = 2;

/// Stock or quote price with exact decimal precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);
    /// Smallest price increment (one cent).
    pub const TICK: Self = Self(Decimal::from_parts(1, 0, 0, false, PRICE_DP));

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Round to two decimal places (banker's rounding on the midpoint).
    #[inline]
    pub fn round_cents(&self) -> Self {
        Self(self.0.round_dp(PRICE_DP))
    }

    /// True if the value carries no more than two decimal places.
    #[inline]
    pub fn has_cents_precision(&self) -> bool {
        self.0.round_dp(PRICE_DP) == self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<Decimal> for Price {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<Decimal> for Price {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_tick_is_one_cent() {
        assert_eq!(Price::TICK.inner(), dec!(0.01));
    }

    #[test]
    fn test_round_cents_bankers_midpoint() {
        assert_eq!(Price::new(dec!(10.005)).round_cents().inner(), dec!(10.00));
        assert_eq!(Price::new(dec!(10.015)).round_cents().inner(), dec!(10.02));
        assert_eq!(Price::new(dec!(9.4999)).round_cents().inner(), dec!(9.50));
    }

    #[test]
    fn test_cents_precision() {
        assert!(Price::new(dec!(9.99)).has_cents_precision());
        assert!(Price::new(dec!(10)).has_cents_precision());
        assert!(Price::new(dec!(10.500)).has_cents_precision());
        assert!(!Price::new(dec!(9.999)).has_cents_precision());
    }

    #[test]
    fn test_display_always_two_places() {
        assert_eq!(Price::new(dec!(10)).to_string(), "10.00");
        assert_eq!(Price::new(dec!(9.5)).to_string(), "9.50");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let price: Price = " 10.25\n".parse().unwrap();
        assert_eq!(price.inner(), dec!(10.25));
        assert!("ten".parse::<Price>().is_err());
    }
}
