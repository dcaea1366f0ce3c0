//! Player quote collaborator.

use std::collections::VecDeque;

use mmg_core::Quote;

use crate::error::{AppError, AppResult};
use crate::session::RoundContext;

/// Supplies the player's quote each round.
///
/// Implementations own input validation: the returned quote must satisfy
/// `bid < market < ask` with at most two decimal places. The session calls
/// this synchronously and waits for as long as it takes.
pub trait QuoteProvider {
    fn player_quote(&mut self, ctx: &RoundContext<'_>) -> AppResult<Quote>;
}

/// Replays a fixed list of quotes, one per round.
#[derive(Debug, Clone, Default)]
pub struct ScriptedQuoteProvider {
    quotes: VecDeque<Quote>,
}

impl ScriptedQuoteProvider {
    pub fn new(quotes: impl IntoIterator<Item = Quote>) -> Self {
        Self {
            quotes: quotes.into_iter().collect(),
        }
    }
}

impl QuoteProvider for ScriptedQuoteProvider {
    fn player_quote(&mut self, ctx: &RoundContext<'_>) -> AppResult<Quote> {
        self.quotes
            .pop_front()
            .ok_or(AppError::NoQuote(ctx.round_index))
    }
}
