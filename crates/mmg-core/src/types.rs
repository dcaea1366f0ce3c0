//! Game domain types.
//!
//! Contains the two-sided `Quote`, the `Participant` ledger kept for the
//! player and the bot, and the append-only `PriceHistory`.

use crate::error::{CoreError, Result};
use crate::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Returns 1 for buy, -1 for sell (inventory delta of one unit).
    pub fn sign(&self) -> i64 {
        match self {
            Self::Buy => 1,
            Self::Sell => -1,
        }
    }

    /// Stable lowercase label for metrics and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for TradeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a participant record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantRole {
    Player,
    Bot,
}

impl ParticipantRole {
    /// Stable lowercase label for metrics and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Bot => "bot",
        }
    }
}

impl fmt::Display for ParticipantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Bot => write!(f, "Bot"),
        }
    }
}

/// A bid/ask pair offered for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: Price,
    pub ask: Price,
}

impl Quote {
    pub fn new(bid: Price, ask: Price) -> Self {
        Self { bid, ask }
    }

    /// Ask minus bid.
    pub fn spread(&self) -> Price {
        self.ask - self.bid
    }

    /// Price offered on the given side (bid for buys, ask for sells).
    pub fn price_for(&self, side: TradeSide) -> Price {
        match side {
            TradeSide::Buy => self.bid,
            TradeSide::Sell => self.ask,
        }
    }

    /// True if the quote straddles the market: `bid < market < ask`.
    pub fn straddles(&self, market: Price) -> bool {
        self.bid < market && self.ask > market
    }

    /// Check a player-entered quote against the current market price.
    ///
    /// Both sides must be positive, carry at most two decimal places,
    /// and sit on the correct side of the market.
    pub fn validate_against(&self, market: Price) -> Result<()> {
        validate_bid(self.bid, market)?;
        validate_ask(self.ask, market)
    }
}

/// Validate a single bid price against the market.
pub fn validate_bid(bid: Price, market: Price) -> Result<()> {
    validate_cents(bid)?;
    if bid >= market {
        return Err(CoreError::InvalidQuote(format!(
            "bid {bid} must be below the market price {market}"
        )));
    }
    Ok(())
}

/// Validate a single ask price against the market.
pub fn validate_ask(ask: Price, market: Price) -> Result<()> {
    validate_cents(ask)?;
    if ask <= market {
        return Err(CoreError::InvalidQuote(format!(
            "ask {ask} must be above the market price {market}"
        )));
    }
    Ok(())
}

fn validate_cents(price: Price) -> Result<()> {
    if !price.is_positive() {
        return Err(CoreError::InvalidPrice(format!(
            "{} is not positive",
            price.inner()
        )));
    }
    if !price.has_cents_precision() {
        return Err(CoreError::InvalidPrice(format!(
            "{} has more than 2 decimal places",
            price.inner()
        )));
    }
    Ok(())
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.bid, self.ask)
    }
}

/// Balance and inventory of one side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub role: ParticipantRole,
    /// Cash balance.
    pub balance: Decimal,
    /// Net units held (positive = long, negative = short).
    pub inventory: i64,
}

impl Participant {
    /// Create a participant with a starting balance and flat inventory.
    pub fn new(role: ParticipantRole, balance: Decimal) -> Self {
        Self {
            role,
            balance,
            inventory: 0,
        }
    }

    /// Buy one unit at `price`.
    pub fn buy(&mut self, price: Price) {
        self.trade(TradeSide::Buy, price);
    }

    /// Sell one unit at `price`.
    pub fn sell(&mut self, price: Price) {
        self.trade(TradeSide::Sell, price);
    }

    /// Trade one unit on `side` at `price`.
    pub fn trade(&mut self, side: TradeSide, price: Price) {
        let sign = side.sign();
        self.balance -= Decimal::from(sign) * price.inner();
        self.inventory += sign;
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}- Balance: £{:.2}, Inventory: {}",
            self.role, self.balance, self.inventory
        )
    }
}

/// Append-only stock price series.
///
/// Index 0 is the initial price; every later entry is one generated price.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PriceHistory {
    prices: Vec<Price>,
}

impl PriceHistory {
    /// Seed a history with the initial price.
    pub fn new(initial: Price) -> Self {
        Self {
            prices: vec![initial],
        }
    }

    /// Append the next price.
    pub fn push(&mut self, price: Price) {
        self.prices.push(price);
    }

    /// Most recent price.
    pub fn last(&self) -> Price {
        // The constructor seeds one entry and entries are never removed.
        self.prices[self.prices.len() - 1]
    }

    /// Price before the most recent one, if any.
    pub fn previous(&self) -> Option<Price> {
        self.prices.len().checked_sub(2).map(|i| self.prices[i])
    }

    /// The last `n` prices (or all of them if fewer exist).
    pub fn tail(&self, n: usize) -> &[Price] {
        let start = self.prices.len().saturating_sub(n);
        &self.prices[start..]
    }

    /// Initial price.
    pub fn first(&self) -> Price {
        self.prices[0]
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Price> {
        self.prices.iter()
    }

    pub fn as_slice(&self) -> &[Price] {
        &self.prices
    }
}
