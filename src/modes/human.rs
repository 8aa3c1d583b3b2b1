use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, Outcome, Round, RoundResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

use super::driver::RoundDriver;

/// What the player is looking at
pub enum Screen {
    /// Title with the carried high score, waiting for a start
    Title,
    Playing(RoundDriver<StdRng>),
    /// Win or lose banner for the round that just ended
    Result(RoundResult),
}

pub struct HumanMode {
    config: GameConfig,
    /// Seeds each round, so a configured seed replays the whole session
    session_rng: StdRng,
    screen: Screen,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, high_score: i32) -> Self {
        let session_rng = config.make_rng();

        Self {
            config,
            session_rng,
            screen: Screen::Title,
            metrics: GameMetrics::new(high_score),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick, only while a round is running
                outcome = next_round_tick(&mut self.screen) => {
                    self.on_tick(outcome);
                }

                // Render frame
                _ = render_timer.tick() => {
                    if let Screen::Playing(_) = self.screen {
                        self.metrics.update();
                    }
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.screen, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Turn(direction) => {
                if let Screen::Playing(driver) = &mut self.screen {
                    driver.on_direction_input(direction);
                }
            }
            KeyAction::Confirm => match self.screen {
                Screen::Title => self.start_round(),
                Screen::Result(_) => self.screen = Screen::Title,
                Screen::Playing(_) => {}
            },
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn start_round(&mut self) {
        let rng = StdRng::seed_from_u64(self.session_rng.gen());
        let round = Round::new(&self.config, rng);

        self.metrics.on_round_start();
        self.screen = Screen::Playing(RoundDriver::new(round, self.config.tick_interval()));
    }

    fn on_tick(&mut self, outcome: Outcome) {
        if !outcome.is_terminal() {
            return;
        }

        let result = match &self.screen {
            Screen::Playing(driver) => driver.result(),
            _ => None,
        };

        if let Some(result) = result {
            self.metrics.on_round_over(&result);
            info!(
                "round {} finished: {:?}, carrying {} ({} win(s) so far)",
                self.metrics.rounds_played,
                result.end,
                result.carried_score(),
                self.metrics.wins
            );
            self.screen = Screen::Result(result);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

/// Resolves with the next outcome of the running round; pends on any other screen
async fn next_round_tick(screen: &mut Screen) -> Outcome {
    match screen {
        Screen::Playing(driver) => driver.next_tick().await,
        _ => std::future::pending().await,
    }
}
