//! Line-oriented console input.
//!
//! Every prompt re-asks until the answer is usable. End of input is
//! `AppError::InputClosed`.

use std::io::{BufRead, Write};

use mmg_core::types::{validate_ask, validate_bid};
use mmg_core::{Difficulty, Price, Quote};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::provider::QuoteProvider;
use crate::session::RoundContext;

/// Reads answers from `input` and writes prompts to `output`.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `prompt` and read one trimmed line.
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn ask_difficulty(&mut self) -> AppResult<Difficulty> {
        loop {
            let answer = self.read_line("Choose a difficulty (1 = easy, 2 = medium, 3 = hard): ")?;
            match answer.parse::<u8>().map(Difficulty::try_from) {
                Ok(Ok(difficulty)) => return Ok(difficulty),
                _ => writeln!(self.output, "Please enter 1, 2 or 3.")?,
            }
        }
    }

    pub fn ask_rounds(&mut self) -> AppResult<u32> {
        loop {
            let answer = self.read_line("How many rounds would you like to play? ")?;
            match answer.parse::<u32>() {
                Ok(rounds) if rounds >= 1 => return Ok(rounds),
                _ => writeln!(self.output, "Please enter a whole number of at least 1.")?,
            }
        }
    }

    pub fn ask_bid(&mut self, market: Price) -> AppResult<Price> {
        loop {
            let answer = self.read_line("Bid price: £")?;
            match answer.parse::<Price>() {
                Ok(bid) if validate_bid(bid, market).is_ok() => return Ok(bid),
                result => {
                    debug!(%answer, ?result, "Rejected bid");
                    writeln!(
                        self.output,
                        "You must enter a bid price less than the current market price \
                         with exactly 2 decimal places"
                    )?;
                }
            }
        }
    }

    pub fn ask_ask(&mut self, market: Price) -> AppResult<Price> {
        loop {
            let answer = self.read_line("Ask price: £")?;
            match answer.parse::<Price>() {
                Ok(ask) if validate_ask(ask, market).is_ok() => return Ok(ask),
                result => {
                    debug!(%answer, ?result, "Rejected ask");
                    writeln!(
                        self.output,
                        "You must enter an ask price more than the current market price \
                         with exactly 2 decimal places"
                    )?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> QuoteProvider for Console<R, W> {
    fn player_quote(&mut self, ctx: &RoundContext<'_>) -> AppResult<Quote> {
        writeln!(self.output, "The current stock price is £{}", ctx.market)?;
        writeln!(self.output)?;
        let bid = self.ask_bid(ctx.market)?;
        let ask = self.ask_ask(ctx.market)?;
        Ok(Quote::new(bid, ask))
    }
}
