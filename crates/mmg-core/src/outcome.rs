//! End-of-game classification.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Result of a finished game from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    /// Made a profit and finished ahead of the bot.
    Win,
    /// Made a loss, or made a profit but finished behind the bot.
    Loss,
    /// Made a profit and finished level with the bot.
    Draw,
    /// Finished exactly on the initial balance.
    Neutral,
}

impl GameOutcome {
    /// Classify by profit sign first, then player-vs-bot balance.
    pub fn classify(profit: Decimal, player_balance: Decimal, bot_balance: Decimal) -> Self {
        match profit.cmp(&Decimal::ZERO) {
            Ordering::Greater => match player_balance.cmp(&bot_balance) {
                Ordering::Greater => Self::Win,
                Ordering::Less => Self::Loss,
                Ordering::Equal => Self::Draw,
            },
            Ordering::Less => Self::Loss,
            Ordering::Equal => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Loss => "loss",
            Self::Draw => "draw",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
