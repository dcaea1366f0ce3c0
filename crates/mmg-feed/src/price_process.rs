//! Single-step geometric Brownian motion with random drift.

use mmg_core::{GameConfig, Price, PriceHistory};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{FeedError, FeedResult};
use crate::random::NormalSource;

/// Parameters of the price process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GbmParams {
    /// Volatility σ.
    pub volatility: f64,
    /// Mean of the drift distribution.
    pub drift_mean: f64,
    /// Standard deviation of the drift distribution.
    pub drift_std: f64,
    /// Time step; one round is one unit.
    pub dt: f64,
}

impl GbmParams {
    pub fn new(volatility: f64, drift_mean: f64, drift_std: f64) -> Self {
        Self {
            volatility,
            drift_mean,
            drift_std,
            dt: 1.0,
        }
    }

    pub fn from_config(config: &GameConfig) -> FeedResult<Self> {
        Ok(Self::new(
            to_f64(config.volatility)?,
            to_f64(config.drift_mean)?,
            to_f64(config.drift_std)?,
        ))
    }
}

fn to_f64(value: Decimal) -> FeedResult<f64> {
    value
        .to_f64()
        .ok_or_else(|| FeedError::Conversion(value.to_string()))
}

/// Compute the next price from the last entry of `history`.
///
/// Consumes exactly one drift draw and one shock draw from `rng`. The result
/// is rounded to cents; anything that rounds below one cent is floored to
/// `Price::TICK` so the series stays strictly positive.
pub fn next_price<R: NormalSource + ?Sized>(
    history: &PriceHistory,
    params: &GbmParams,
    rng: &mut R,
) -> FeedResult<Price> {
    let sigma = params.volatility;
    let mu = rng.normal(params.drift_mean, params.drift_std);
    let z = rng.normal(0.0, 1.0);

    let last = to_f64(history.last().inner())?;
    let exponent = (mu - 0.5 * sigma * sigma) * params.dt + sigma * params.dt.sqrt() * z;
    let next = last * exponent.exp();

    if !next.is_finite() {
        return Err(FeedError::NonFinitePrice(next));
    }
    let raw = Decimal::from_f64_retain(next).ok_or(FeedError::NonFinitePrice(next))?;
    let price = Price::new(raw).round_cents().max(Price::TICK);

    debug!(
        drift = mu,
        shock = z,
        last = %history.last(),
        next = %price,
        "Generated price"
    );

    Ok(price)
}

/// Owns the random source and process parameters for a session.
pub struct PriceGenerator<R: NormalSource> {
    params: GbmParams,
    rng: R,
}

impl<R: NormalSource> PriceGenerator<R> {
    pub fn new(params: GbmParams, rng: R) -> Self {
        Self { params, rng }
    }

    pub fn params(&self) -> &GbmParams {
        &self.params
    }

    /// Generate the next price after the last entry of `history`.
    ///
    /// The caller appends the result.
    pub fn next_price(&mut self, history: &PriceHistory) -> FeedResult<Price> {
        next_price(history, &self.params, &mut self.rng)
    }
}
