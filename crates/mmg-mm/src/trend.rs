//! Short-horizon trend statistics over the price history.

use mmg_core::PriceHistory;
use rust_decimal::Decimal;

/// Moving average and last price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendStats {
    /// Mean of the last `window` prices (fewer if the history is shorter).
    pub moving_average: Decimal,
    /// Last price minus the one before it; zero with a single price.
    pub rate_of_change: Decimal,
}

impl TrendStats {
    pub fn from_history(history: &PriceHistory, window: usize) -> Self {
        let tail = history.tail(window.max(1));
        let sum: Decimal = tail.iter().map(|p| p.inner()).sum();
        let moving_average = sum / Decimal::from(tail.len());

        let rate_of_change = history
            .previous()
            .map(|prev| history.last().inner() - prev.inner())
            .unwrap_or(Decimal::ZERO);

        Self {
            moving_average,
            rate_of_change,
        }
    }

    /// Rate of change relative to the moving average (zero if the average is zero).
    pub fn relative_change(&self) -> Decimal {
        if self.moving_average.is_zero() {
            return Decimal::ZERO;
        }
        self.rate_of_change / self.moving_average
    }

    pub fn is_rising(&self) -> bool {
        self.rate_of_change > Decimal::ZERO
    }

    pub fn is_falling(&self) -> bool {
        self.rate_of_change < Decimal::ZERO
    }
}
