//! Game session orchestration.
//!
//! Owns the price history and both participant ledgers. Each round:
//!
//! ```text
//! PriceGenerator → history.push → QuoteProvider (player) + BotQuoter (bot)
//!   → resolve_round → PositionLimiter (player, then bot) → GameDisplay
//! ```
//!
//! After the last round one more price is generated and both inventories
//! are liquidated at it before scoring.

use chrono::{DateTime, Utc};
use mmg_core::{
    GameConfig, GameOutcome, Participant, ParticipantRole, Price, PriceHistory, Quote,
};
use mmg_executor::{resolve_round, TradeEvent, TradeLog};
use mmg_feed::{GbmParams, NormalSource, PriceGenerator};
use mmg_mm::{BotQuoter, QuoterConfig};
use mmg_position::{liquidate, LimiterConfig, Liquidation, PositionLimiter};
use mmg_telemetry::Metrics;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, info_span};

use crate::display::GameDisplay;
use crate::error::{AppError, AppResult};
use crate::provider::QuoteProvider;

/// What the player sees when asked for a quote.
#[derive(Debug, Clone, Copy)]
pub struct RoundContext<'a> {
    /// Current round, starting at 1.
    pub round_index: u32,
    pub total_rounds: u32,
    /// This round's stock price.
    pub market: Price,
    pub history: &'a PriceHistory,
    pub player: Participant,
    pub bot: Participant,
}

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    pub round_index: u32,
    pub total_rounds: u32,
    pub market: Price,
    pub player_quote: Quote,
    pub bot_quote: Quote,
    /// Matched fills and ties, followed by any forced trades.
    pub trades: TradeLog,
    pub player: Participant,
    pub bot: Participant,
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub started_at: DateTime<Utc>,
    pub rounds_played: u32,
    pub initial_balance: Decimal,
    /// Post-game price used for liquidation.
    pub final_price: Price,
    pub player: Participant,
    pub bot: Participant,
    pub liquidations: Vec<Liquidation>,
    /// Player balance minus the initial balance.
    pub profit: Decimal,
    pub outcome: GameOutcome,
    pub history: PriceHistory,
}

/// One game between the player and the bot.
pub struct GameSession<R: NormalSource> {
    config: GameConfig,
    generator: PriceGenerator<R>,
    quoter: BotQuoter,
    limiter: PositionLimiter,
    history: PriceHistory,
    player: Participant,
    bot: Participant,
    rounds_played: u32,
    finished: bool,
    started_at: DateTime<Utc>,
}

impl<R: NormalSource> GameSession<R> {
    /// Create a session; fails if `config` does not describe a playable game.
    pub fn new(
        config: GameConfig,
        quoter_config: QuoterConfig,
        limiter_config: LimiterConfig,
        rng: R,
    ) -> AppResult<Self> {
        config.validate()?;
        let params = GbmParams::from_config(&config)?;

        Ok(Self {
            generator: PriceGenerator::new(params, rng),
            quoter: BotQuoter::new(quoter_config),
            limiter: PositionLimiter::new(config.position_limit, limiter_config),
            history: PriceHistory::new(config.initial_price),
            player: Participant::new(ParticipantRole::Player, config.initial_balance),
            bot: Participant::new(ParticipantRole::Bot, config.initial_balance),
            rounds_played: 0,
            finished: false,
            started_at: Utc::now(),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &PriceHistory {
        &self.history
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn bot(&self) -> &Participant {
        &self.bot
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.config.num_rounds - self.rounds_played
    }

    /// Play every round, then liquidate and score.
    pub fn run<P, D>(&mut self, provider: &mut P, display: &mut D) -> AppResult<GameSummary>
    where
        P: QuoteProvider + ?Sized,
        D: GameDisplay + ?Sized,
    {
        info!(
            rounds = self.config.num_rounds,
            volatility = %self.config.volatility,
            position_limit = self.config.position_limit,
            initial_balance = %self.config.initial_balance,
            "Game started"
        );
        display.game_started(&self.config, &self.player, &self.bot)?;

        while self.rounds_remaining() > 0 {
            self.play_round(provider, display)?;
        }
        self.finish(display)
    }

    /// Play the next round.
    pub fn play_round<P, D>(&mut self, provider: &mut P, display: &mut D) -> AppResult<RoundReport>
    where
        P: QuoteProvider + ?Sized,
        D: GameDisplay + ?Sized,
    {
        if self.rounds_remaining() == 0 {
            return Err(AppError::GameOver(self.config.num_rounds));
        }
        let round_index = self.rounds_played + 1;
        let total_rounds = self.config.num_rounds;
        let _span = info_span!("round", round = round_index).entered();

        let market = self.generator.next_price(&self.history)?;
        self.history.push(market);
        Metrics::price(market.inner().to_f64().unwrap_or_default());

        let ctx = RoundContext {
            round_index,
            total_rounds,
            market,
            history: &self.history,
            player: self.player,
            bot: self.bot,
        };
        display.round_started(&ctx)?;

        let player_quote = provider.player_quote(&ctx)?;
        debug_assert!(
            player_quote.validate_against(market).is_ok(),
            "quote provider returned {player_quote} against market {market}"
        );

        let bot_quote = self.quoter.quote(
            &self.history,
            self.bot.inventory,
            self.config.position_limit,
            self.config.volatility,
            round_index,
            total_rounds,
        );
        debug!(%market, %player_quote, %bot_quote, "Quotes collected");

        let resolution = resolve_round(&player_quote, &bot_quote, self.player, self.bot);
        let mut trades = resolution.trades;

        let (player, player_forced) = self.limiter.enforce(resolution.player, market);
        let (bot, bot_forced) = self.limiter.enforce(resolution.bot, market);
        trades.extend(player_forced);
        trades.extend(bot_forced);

        self.player = player;
        self.bot = bot;
        self.rounds_played = round_index;

        record_trade_metrics(&trades);
        Metrics::round_resolved();

        info!(
            %market,
            player_balance = %self.player.balance,
            player_inventory = self.player.inventory,
            bot_balance = %self.bot.balance,
            bot_inventory = self.bot.inventory,
            "Round complete"
        );

        let report = RoundReport {
            round_index,
            total_rounds,
            market,
            player_quote,
            bot_quote,
            trades,
            player: self.player,
            bot: self.bot,
        };
        display.round_resolved(&report)?;
        Ok(report)
    }

    /// Generate the post-game price, liquidate both participants and score.
    pub fn finish<D>(&mut self, display: &mut D) -> AppResult<GameSummary>
    where
        D: GameDisplay + ?Sized,
    {
        if self.finished {
            return Err(AppError::GameOver(self.config.num_rounds));
        }
        if self.rounds_remaining() > 0 {
            return Err(AppError::RoundsRemaining(self.rounds_remaining()));
        }

        let final_price = self.generator.next_price(&self.history)?;
        self.history.push(final_price);
        Metrics::price(final_price.inner().to_f64().unwrap_or_default());

        let (player, player_liq) = liquidate(self.player, final_price);
        let (bot, bot_liq) = liquidate(self.bot, final_price);
        self.player = player;
        self.bot = bot;
        self.finished = true;

        let profit = self.player.balance - self.config.initial_balance;
        let outcome = GameOutcome::classify(profit, self.player.balance, self.bot.balance);
        Metrics::game_finished(outcome.as_str());

        info!(
            %final_price,
            player_balance = %self.player.balance,
            bot_balance = %self.bot.balance,
            %profit,
            %outcome,
            "Game complete"
        );

        let summary = GameSummary {
            started_at: self.started_at,
            rounds_played: self.rounds_played,
            initial_balance: self.config.initial_balance,
            final_price,
            player: self.player,
            bot: self.bot,
            liquidations: vec![player_liq, bot_liq],
            profit,
            outcome,
            history: self.history.clone(),
        };
        display.game_finished(&summary)?;
        Ok(summary)
    }
}

fn record_trade_metrics(trades: &TradeLog) {
    for event in trades.iter() {
        let notional = event.price().inner().to_f64().unwrap_or_default();
        match event {
            TradeEvent::Filled { role, side, .. } => {
                Metrics::fill(role.as_str(), side.as_str(), notional)
            }
            TradeEvent::Tied { side, .. } => Metrics::tie(side.as_str()),
            TradeEvent::Forced { role, side, .. } => {
                Metrics::forced_trade(role.as_str(), side.as_str(), notional)
            }
        }
    }
}
