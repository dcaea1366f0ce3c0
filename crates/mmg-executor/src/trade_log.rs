//! Human-readable record of what traded in a round.

use mmg_core::{ParticipantRole, Price, TradeSide};
use serde::Serialize;
use std::fmt;

/// One thing that happened to the book during a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TradeEvent {
    /// A participant won its side and traded one unit at its own price.
    Filled {
        role: ParticipantRole,
        side: TradeSide,
        price: Price,
    },
    /// Both participants quoted the same price on a side; nothing traded.
    Tied { side: TradeSide, price: Price },
    /// A position-limit breach forced a one-unit trade at a penalty price.
    Forced {
        role: ParticipantRole,
        side: TradeSide,
        price: Price,
    },
}

impl TradeEvent {
    /// The participant whose balance and inventory changed, if any.
    pub fn role(&self) -> Option<ParticipantRole> {
        match self {
            Self::Filled { role, .. } | Self::Forced { role, .. } => Some(*role),
            Self::Tied { .. } => None,
        }
    }

    pub fn side(&self) -> TradeSide {
        match self {
            Self::Filled { side, .. } | Self::Tied { side, .. } | Self::Forced { side, .. } => *side,
        }
    }

    pub fn price(&self) -> Price {
        match self {
            Self::Filled { price, .. } | Self::Tied { price, .. } | Self::Forced { price, .. } => {
                *price
            }
        }
    }
}

fn other(role: ParticipantRole) -> &'static str {
    match role {
        ParticipantRole::Player => "the bot",
        ParticipantRole::Bot => "the player",
    }
}

impl fmt::Display for TradeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filled {
                role,
                side: TradeSide::Buy,
                price,
            } => write!(
                f,
                "{role} has bid higher than {} and buys a single asset. \
                 {role}'s inventory increases by 1 and balance decreases by £{price}.",
                other(*role)
            ),
            Self::Filled {
                role,
                side: TradeSide::Sell,
                price,
            } => write!(
                f,
                "{role} has asked for a lower price than {} and sells a single asset. \
                 {role}'s inventory decreases by 1 and balance increases by £{price}.",
                other(*role)
            ),
            Self::Tied {
                side: TradeSide::Buy,
                price,
            } => write!(
                f,
                "Both the player and bot have bid the exact same price (£{price}). \
                 Therefore, no stock is bought this round."
            ),
            Self::Tied {
                side: TradeSide::Sell,
                price,
            } => write!(
                f,
                "Both the player and bot have asked the exact same price (£{price}). \
                 Therefore, no stock is sold this round."
            ),
            Self::Forced {
                role,
                side: TradeSide::Sell,
                price,
            } => write!(
                f,
                "{role} is long on too many positions and is forced to sell one unit \
                 below the market price (£{price})."
            ),
            Self::Forced {
                role,
                side: TradeSide::Buy,
                price,
            } => write!(
                f,
                "{role} is short on too many positions and is forced to buy one unit \
                 above the market price (£{price})."
            ),
        }
    }
}

/// Ordered list of trade events for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TradeLog {
    events: Vec<TradeEvent>,
}

impl TradeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: TradeEvent) {
        self.events.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TradeEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events that moved the given participant's book.
    pub fn for_role(&self, role: ParticipantRole) -> impl Iterator<Item = &TradeEvent> {
        self.events.iter().filter(move |e| e.role() == Some(role))
    }

    pub fn as_slice(&self) -> &[TradeEvent] {
        &self.events
    }
}

impl Extend<TradeEvent> for TradeLog {
    fn extend<I: IntoIterator<Item = TradeEvent>>(&mut self, iter: I) {
        self.events.extend(iter);
    }
}

impl fmt::Display for TradeLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, event) in self.events.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{event}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_filled_buy_message() {
        let event = TradeEvent::Filled {
            role: ParticipantRole::Player,
            side: TradeSide::Buy,
            price: Price::new(dec!(9.6)),
        };
        let text = event.to_string();
        assert!(text.starts_with("Player has bid higher than the bot"));
        assert!(text.contains("£9.60"));
    }

    #[test]
    fn test_tied_event_has_no_role() {
        let event = TradeEvent::Tied {
            side: TradeSide::Sell,
            price: Price::new(dec!(10.5)),
        };
        assert_eq!(event.role(), None);
        assert_eq!(event.side(), TradeSide::Sell);
        assert!(event.to_string().contains("no stock is sold"));
    }

    #[test]
    fn test_log_filters_by_role() {
        let mut log = TradeLog::new();
        log.push(TradeEvent::Filled {
            role: ParticipantRole::Bot,
            side: TradeSide::Buy,
            price: Price::new(dec!(9.5)),
        });
        log.extend([TradeEvent::Forced {
            role: ParticipantRole::Player,
            side: TradeSide::Sell,
            price: Price::new(dec!(6)),
        }]);

        assert_eq!(log.len(), 2);
        assert_eq!(log.for_role(ParticipantRole::Bot).count(), 1);
        assert_eq!(log.for_role(ParticipantRole::Player).count(), 1);
        assert_eq!(log.to_string().lines().count(), 2);
    }
}
