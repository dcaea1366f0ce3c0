//! Full-game integration tests.
//!
//! Every game here uses scripted randomness and scripted player quotes, so
//! balances and outcomes are computed by hand.

use mmg_core::{GameConfig, GameOutcome, Participant, ParticipantRole, Price, Quote, TradeSide};
use mmg_executor::TradeEvent;
use mmg_feed::ScriptedNormalSource;
use mmg_game::{
    AppResult, GameDisplay, GameSession, GameSummary, NullDisplay, QuoteProvider, RoundContext,
    RoundReport, ScriptedQuoteProvider,
};
use mmg_mm::QuoterConfig;
use mmg_position::LimiterConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn quote(bid: Decimal, ask: Decimal) -> Quote {
    Quote::new(Price::new(bid), Price::new(ask))
}

/// σ = 0.1 with μ = 0.005 and no drift noise: the drift cancels the Itô
/// term, so with zero shocks every price equals the initial £10.00.
fn config(num_rounds: u32, position_limit: u32, initial_balance: Decimal) -> GameConfig {
    GameConfig {
        num_rounds,
        initial_price: Price::new(dec!(10.00)),
        volatility: dec!(0.1),
        drift_mean: dec!(0.005),
        drift_std: dec!(0),
        position_limit,
        initial_balance,
    }
}

fn session(config: GameConfig, shocks: Vec<f64>) -> GameSession<ScriptedNormalSource> {
    GameSession::new(
        config,
        QuoterConfig::default(),
        LimiterConfig::default(),
        ScriptedNormalSource::new(shocks),
    )
    .unwrap()
}

/// Keeps every round report.
#[derive(Default)]
struct RecordingDisplay {
    started: usize,
    rounds: Vec<RoundReport>,
    summary: Option<GameSummary>,
}

impl GameDisplay for RecordingDisplay {
    fn round_started(&mut self, _ctx: &RoundContext<'_>) -> AppResult<()> {
        self.started += 1;
        Ok(())
    }

    fn round_resolved(&mut self, report: &RoundReport) -> AppResult<()> {
        self.rounds.push(report.clone());
        Ok(())
    }

    fn game_finished(&mut self, summary: &GameSummary) -> AppResult<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}

/// Sells one cent above the market and never really bids.
struct AlwaysSell;

impl QuoteProvider for AlwaysSell {
    fn player_quote(&mut self, ctx: &RoundContext<'_>) -> AppResult<Quote> {
        Ok(Quote::new(Price::TICK, ctx.market + Price::TICK))
    }
}

#[test]
fn test_single_round_game_scored_after_liquidation() {
    let mut game = session(config(1, 1, dec!(20)), Vec::new());
    let mut player = ScriptedQuoteProvider::new([quote(dec!(9.60), dec!(10.60))]);
    let mut display = RecordingDisplay::default();

    let summary = game.run(&mut player, &mut display).unwrap();

    // Bot quotes 9.50 / 10.50. Player buys at 9.60, bot sells at 10.50.
    let round = &display.rounds[0];
    assert_eq!(round.bot_quote, quote(dec!(9.50), dec!(10.50)));
    assert_eq!(round.player.balance, dec!(10.40));
    assert_eq!(round.player.inventory, 1);
    assert_eq!(round.bot.balance, dec!(30.50));
    assert_eq!(round.bot.inventory, -1);

    // Both closed at 10.00
    assert_eq!(summary.final_price.inner(), dec!(10.00));
    assert_eq!(summary.player.balance, dec!(20.40));
    assert_eq!(summary.bot.balance, dec!(20.50));
    assert_eq!(summary.player.inventory, 0);
    assert_eq!(summary.bot.inventory, 0);
    assert_eq!(summary.profit, dec!(0.40));
    assert_eq!(summary.outcome, GameOutcome::Loss);

    assert_eq!(summary.liquidations.len(), 2);
    assert_eq!(summary.liquidations[0].proceeds, dec!(10.00));
    assert_eq!(summary.liquidations[1].proceeds, dec!(-10.00));
    assert_eq!(display.summary, Some(summary));
}

#[test]
fn test_bot_wins_both_sides_with_decaying_spread() {
    let mut game = session(config(5, 3, dec!(60)), Vec::new());
    let mut player = ScriptedQuoteProvider::new(vec![quote(dec!(9.00), dec!(11.00)); 5]);
    let mut display = RecordingDisplay::default();

    let summary = game.run(&mut player, &mut display).unwrap();

    let bot_quotes: Vec<Quote> = display.rounds.iter().map(|r| r.bot_quote).collect();
    assert_eq!(
        bot_quotes,
        vec![
            quote(dec!(9.50), dec!(10.50)),
            quote(dec!(9.60), dec!(10.40)),
            quote(dec!(9.70), dec!(10.30)),
            quote(dec!(9.80), dec!(10.20)),
            quote(dec!(9.90), dec!(10.10)),
        ]
    );

    for round in &display.rounds {
        assert_eq!(round.trades.len(), 2);
        assert!(round
            .trades
            .iter()
            .all(|e| e.role() == Some(ParticipantRole::Bot)));
        assert_eq!(round.bot.inventory, 0);
    }

    // Bot earns the spread every round: 1.0 + 0.8 + 0.6 + 0.4 + 0.2
    assert_eq!(summary.bot.balance, dec!(63.00));
    assert_eq!(summary.player.balance, dec!(60));
    assert_eq!(summary.outcome, GameOutcome::Neutral);
    assert_eq!(display.started, 5);
}

#[test]
fn test_forced_sale_each_round_after_bot_goes_long() {
    let mut game = session(config(3, 1, dec!(40)), Vec::new());
    let mut display = RecordingDisplay::default();

    let summary = game.run(&mut AlwaysSell, &mut display).unwrap();
    let rounds = &display.rounds;

    // Round 1: player sells at 10.01, bot buys at 9.50
    assert_eq!(rounds[0].player.balance, dec!(50.01));
    assert_eq!(rounds[0].bot.inventory, 1);
    assert_eq!(rounds[0].bot.balance, dec!(30.50));

    // Round 2: long bot skews its ask down to the market, clamps to 10.01
    // and ties the player. Its 9.33 bid fills, breaching the limit.
    assert_eq!(rounds[1].bot_quote, quote(dec!(9.33), dec!(10.01)));
    assert!(rounds[1].trades.iter().any(|e| matches!(
        e,
        TradeEvent::Tied {
            side: TradeSide::Sell,
            ..
        }
    )));
    let forced: Vec<&TradeEvent> = rounds[1]
        .trades
        .iter()
        .filter(|e| matches!(e, TradeEvent::Forced { .. }))
        .collect();
    assert_eq!(
        forced,
        vec![&TradeEvent::Forced {
            role: ParticipantRole::Bot,
            side: TradeSide::Sell,
            price: Price::new(dec!(6.000)),
        }]
    );
    assert_eq!(rounds[1].bot.inventory, 1);
    assert_eq!(rounds[1].bot.balance, dec!(27.17));

    // Round 3: same again with a 9.67 bid
    assert_eq!(rounds[2].bot_quote, quote(dec!(9.67), dec!(10.01)));
    assert_eq!(rounds[2].bot.balance, dec!(23.50));
    assert_eq!(rounds[2].player.inventory, -1);

    // Player buys back at 10.00, bot sells its unit at 10.00
    assert_eq!(summary.player.balance, dec!(40.01));
    assert_eq!(summary.bot.balance, dec!(33.50));
    assert_eq!(summary.profit, dec!(0.01));
    assert_eq!(summary.outcome, GameOutcome::Win);
}

#[test]
fn test_scripted_shocks_drive_history() {
    // Draws alternate drift noise and price shock for each generated price
    let mut game = session(config(2, 1, dec!(30)), vec![0.0, 1.0, 0.0, -1.0]);
    let mut display = RecordingDisplay::default();

    let summary = game.run(&mut AlwaysSell, &mut display).unwrap();

    // 10 · e^0.1 = 11.05, then 11.05 · e^-0.1 = 10.00, then unchanged
    let prices: Vec<Decimal> = summary.history.iter().map(|p| p.inner()).collect();
    assert_eq!(prices, vec![dec!(10.00), dec!(11.05), dec!(10.00), dec!(10.00)]);
    assert_eq!(summary.history.len(), 2 + 2);

    for round in &display.rounds {
        assert!(round.bot_quote.straddles(round.market));
    }
    assert_eq!(display.rounds[0].market.inner(), dec!(11.05));
}

#[test]
fn test_round_by_round_matches_run() {
    let quotes = vec![quote(dec!(9.95), dec!(10.05)); 4];

    let mut stepped = session(config(4, 2, dec!(50)), Vec::new());
    let mut provider = ScriptedQuoteProvider::new(quotes.clone());
    while stepped.rounds_remaining() > 0 {
        stepped.play_round(&mut provider, &mut NullDisplay).unwrap();
    }
    let stepped_summary = stepped.finish(&mut NullDisplay).unwrap();

    let mut whole = session(config(4, 2, dec!(50)), Vec::new());
    let whole_summary = whole
        .run(&mut ScriptedQuoteProvider::new(quotes), &mut NullDisplay)
        .unwrap();

    assert_eq!(stepped_summary.player, whole_summary.player);
    assert_eq!(stepped_summary.bot, whole_summary.bot);
    assert_eq!(stepped_summary.history, whole_summary.history);
    assert_eq!(stepped_summary.outcome, whole_summary.outcome);
}

#[test]
fn test_summary_serializes_to_json() {
    let mut game = session(config(1, 1, dec!(20)), Vec::new());
    let summary = game
        .run(
            &mut ScriptedQuoteProvider::new([quote(dec!(9.60), dec!(10.60))]),
            &mut NullDisplay,
        )
        .unwrap();

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["outcome"], "loss");
    assert_eq!(json["rounds_played"], 1);
    assert_eq!(json["history"].as_array().unwrap().len(), 3);
    assert_eq!(json["player"]["role"], "player");
    assert_eq!(
        summary.player,
        Participant {
            role: ParticipantRole::Player,
            balance: dec!(20.40),
            inventory: 0,
        }
    );
}
