//! Main application wiring.

use std::io::{self, BufRead, Write};

use mmg_core::Difficulty;
use mmg_feed::SeededNormalSource;
use mmg_telemetry::Metrics;
use tracing::info;

use crate::config::AppConfig;
use crate::console::Console;
use crate::display::ConsoleDisplay;
use crate::error::AppResult;
use crate::session::{GameSession, GameSummary};

/// Command-line overrides. `None` / `false` defer to the config file.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub difficulty: Option<Difficulty>,
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub no_chart: bool,
    pub print_metrics: bool,
    pub json_summary: bool,
}

/// One interactive game.
pub struct Application {
    config: AppConfig,
    options: RunOptions,
}

impl Application {
    pub fn new(config: AppConfig, options: RunOptions) -> Self {
        Self { config, options }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Play a game on stdin/stdout.
    pub fn run(&self) -> AppResult<GameSummary> {
        let stdin = io::stdin();
        self.run_with(stdin.lock(), io::stdout(), io::stdout())
    }

    /// Play a game reading answers from `input`, writing prompts to
    /// `prompts` and everything else to `out`.
    pub fn run_with<R, P, W>(&self, input: R, prompts: P, out: W) -> AppResult<GameSummary>
    where
        R: BufRead,
        P: Write,
        W: Write,
    {
        let mut console = Console::new(input, prompts);

        let difficulty = match self.options.difficulty.or(self.config.game.difficulty) {
            Some(difficulty) => difficulty,
            None => console.ask_difficulty()?,
        };
        let rounds = match self.options.rounds.or(self.config.game.num_rounds) {
            Some(rounds) => rounds,
            None => console.ask_rounds()?,
        };
        let game_config = self.config.game_config(difficulty, rounds)?;

        let seed = self.options.seed.or(self.config.game.seed);
        let rng = match seed {
            Some(seed) => SeededNormalSource::from_seed(seed),
            None => SeededNormalSource::from_entropy(),
        };
        info!(%difficulty, rounds, ?seed, "Configured game");

        let display_config = &self.config.display;
        let mut display = ConsoleDisplay::new(out)
            .with_rules(display_config.show_rules)
            .with_chart(
                display_config.show_chart && !self.options.no_chart,
                display_config.chart_height,
                display_config.chart_width,
            );

        let mut session = GameSession::new(
            game_config,
            self.config.quoter.clone(),
            self.config.limiter.clone(),
            rng,
        )?;
        let summary = session.run(&mut console, &mut display)?;

        let mut out = display.into_inner();
        if self.options.json_summary {
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        if self.options.print_metrics {
            write!(out, "{}", Metrics::render()?)?;
        }
        out.flush()?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use mmg_core::GameOutcome;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    /// Zero volatility and zero drift: every price is exactly 10.00 and the
    /// bot always quotes 9.99 / 10.01.
    fn still_market() -> AppConfig {
        let mut config = AppConfig::default();
        config.game.volatility = Some(dec!(0));
        config.game.drift_mean = Some(dec!(0));
        config.game.drift_std = Some(dec!(0));
        config.display.show_rules = false;
        config.display.show_chart = false;
        config
    }

    fn play(app: &Application, input: &str) -> (AppResult<GameSummary>, String) {
        let mut out = Vec::new();
        let result = app.run_with(Cursor::new(input.to_string()), io::sink(), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prompts_for_difficulty_and_rounds() {
        let app = Application::new(still_market(), RunOptions::default());
        let (result, out) = play(&app, "2\n1\n9.00\n11.00\n");
        let summary = result.unwrap();

        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.final_price.inner(), dec!(10.00));
        // Bot buys at 9.99 and sells at 10.01
        assert_eq!(summary.bot.balance, dec!(20.02));
        assert_eq!(summary.player.balance, dec!(20));
        assert_eq!(summary.outcome, GameOutcome::Neutral);
        assert!(out.contains("You went neutral"));
    }

    #[test]
    fn test_options_skip_prompts() {
        let options = RunOptions {
            difficulty: Some(Difficulty::Hard),
            rounds: Some(2),
            seed: Some(1),
            json_summary: true,
            ..RunOptions::default()
        };
        let app = Application::new(still_market(), options);
        let (result, out) = play(&app, "9.99\n10.01\n9.99\n10.01\n");
        let summary = result.unwrap();

        // Every side ties, nothing trades
        assert_eq!(summary.player.balance, dec!(30));
        assert_eq!(summary.bot.balance, dec!(30));
        assert!(out.contains("\"outcome\": \"neutral\""));
    }

    #[test]
    fn test_input_closed_mid_game() {
        let app = Application::new(still_market(), RunOptions::default());
        let (result, _) = play(&app, "1\n3\n9.00\n");
        assert!(matches!(result, Err(AppError::InputClosed)));
    }

    #[test]
    fn test_print_metrics_appends_exposition() {
        let options = RunOptions {
            difficulty: Some(Difficulty::Easy),
            rounds: Some(1),
            print_metrics: true,
            ..RunOptions::default()
        };
        let app = Application::new(still_market(), options);
        let (result, out) = play(&app, "9.00\n11.00\n");
        result.unwrap();
        assert!(out.contains("mmg_rounds_total"));
    }
}
