//! Game output collaborators.

use std::io::Write;

use mmg_core::{GameConfig, GameOutcome, Participant, TradeSide};
use mmg_executor::TradeEvent;
use rust_decimal::Decimal;

use crate::chart::render_chart;
use crate::error::AppResult;
use crate::session::{GameSummary, RoundContext, RoundReport};

/// Receives game progress from a `GameSession`.
pub trait GameDisplay {
    fn game_started(
        &mut self,
        _config: &GameConfig,
        _player: &Participant,
        _bot: &Participant,
    ) -> AppResult<()> {
        Ok(())
    }

    fn round_started(&mut self, ctx: &RoundContext<'_>) -> AppResult<()>;

    fn round_resolved(&mut self, report: &RoundReport) -> AppResult<()>;

    fn game_finished(&mut self, summary: &GameSummary) -> AppResult<()>;
}

/// Discards everything. Used for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDisplay;

impl GameDisplay for NullDisplay {
    fn round_started(&mut self, _ctx: &RoundContext<'_>) -> AppResult<()> {
        Ok(())
    }

    fn round_resolved(&mut self, _report: &RoundReport) -> AppResult<()> {
        Ok(())
    }

    fn game_finished(&mut self, _summary: &GameSummary) -> AppResult<()> {
        Ok(())
    }
}

const RULES: &str = "\
Each round a new stock price is revealed and you quote a bid and an ask.
Your bid must be below the price and your ask above it, to the penny.
The higher bid buys one unit and the lower ask sells one unit; ties trade nothing.
Holding more units than the position limit forces a sale at 40% below the price,
and a short beyond it forces a purchase at 40% above.
At the end both inventories are closed out at one final price.";

/// Prints the game to a terminal in pounds sterling.
pub struct ConsoleDisplay<W: Write> {
    out: W,
    show_rules: bool,
    show_chart: bool,
    chart_height: usize,
    chart_width: usize,
}

impl<W: Write> ConsoleDisplay<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            show_rules: true,
            show_chart: true,
            chart_height: 10,
            chart_width: 60,
        }
    }

    pub fn with_rules(mut self, show_rules: bool) -> Self {
        self.show_rules = show_rules;
        self
    }

    pub fn with_chart(mut self, show_chart: bool, height: usize, width: usize) -> Self {
        self.show_chart = show_chart;
        self.chart_height = height;
        self.chart_width = width;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn statistics(
        &mut self,
        heading: &str,
        player: &Participant,
        bot: &Participant,
    ) -> AppResult<()> {
        writeln!(self.out, "{heading}")?;
        writeln!(self.out, "{player}")?;
        writeln!(self.out, "{bot}")?;
        Ok(())
    }

    fn side(&mut self, report: &RoundReport, side: TradeSide) -> AppResult<()> {
        let (label, player, bot) = match side {
            TradeSide::Buy => ("Bid", report.player_quote.bid, report.bot_quote.bid),
            TradeSide::Sell => ("Ask", report.player_quote.ask, report.bot_quote.ask),
        };
        writeln!(self.out, "{label} prices - Player: £{player}, Bot: £{bot}")?;

        let matched = report
            .trades
            .iter()
            .filter(|e| !matches!(e, TradeEvent::Forced { .. }) && e.side() == side);
        for event in matched {
            writeln!(self.out, "{event}")?;
        }
        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> GameDisplay for ConsoleDisplay<W> {
    fn game_started(
        &mut self,
        config: &GameConfig,
        player: &Participant,
        bot: &Participant,
    ) -> AppResult<()> {
        if self.show_rules {
            writeln!(self.out, "{RULES}")?;
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "{} rounds, starting price £{}, position limit {}.",
            config.num_rounds, config.initial_price, config.position_limit
        )?;
        writeln!(self.out)?;
        self.statistics("Start of game statistics:", player, bot)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn round_started(&mut self, ctx: &RoundContext<'_>) -> AppResult<()> {
        writeln!(
            self.out,
            "---------- Round number {}/{} ----------",
            ctx.round_index, ctx.total_rounds
        )?;
        self.statistics("Start of round statistics:", &ctx.player, &ctx.bot)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn round_resolved(&mut self, report: &RoundReport) -> AppResult<()> {
        writeln!(self.out)?;
        self.side(report, TradeSide::Buy)?;
        self.side(report, TradeSide::Sell)?;

        let mut forced = report
            .trades
            .iter()
            .filter(|e| matches!(e, TradeEvent::Forced { .. }))
            .peekable();
        if forced.peek().is_some() {
            for event in forced {
                writeln!(self.out, "{event}")?;
            }
            writeln!(self.out)?;
        }

        self.statistics("End of round statistics:", &report.player, &report.bot)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn game_finished(&mut self, summary: &GameSummary) -> AppResult<()> {
        writeln!(self.out, "------------ Game Complete ------------")?;
        writeln!(self.out, "Final stock price: £{}", summary.final_price)?;
        for liquidation in &summary.liquidations {
            if liquidation.units != 0 {
                writeln!(self.out, "{liquidation}")?;
            }
        }
        self.statistics("End of game statistics:", &summary.player, &summary.bot)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", outcome_message(summary.outcome, summary.profit))?;

        if self.show_chart {
            writeln!(self.out)?;
            write!(
                self.out,
                "{}",
                render_chart(&summary.history, self.chart_height, self.chart_width)
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Closing line for the player.
pub fn outcome_message(outcome: GameOutcome, profit: Decimal) -> String {
    match outcome {
        GameOutcome::Win => {
            format!("Congratulations! You beat the bot and made a profit of £{profit:.2}.")
        }
        GameOutcome::Loss if profit > Decimal::ZERO => {
            format!("You lost to the bot but made a profit of £{profit:.2}.")
        }
        GameOutcome::Draw => {
            format!("You drew to the bot and you both made a profit of £{profit:.2}.")
        }
        GameOutcome::Loss => format!(
            "You made a loss of £{:.2}. Try again to make a profit",
            profit.abs()
        ),
        GameOutcome::Neutral => "You went neutral. Try again to make a profit".to_string(),
    }
}
