use log::{debug, info};
use rand::Rng;

use super::{
    apple::Apple,
    board::{Board, Cell},
    config::GameConfig,
    direction::Direction,
    snake::{Collision, Outcome, Snake},
};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Won,
    Lost(Collision),
}

/// What a finished round reports to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    pub end: RoundEnd,
    /// Points left when the round ended
    pub score: i32,
}

impl RoundResult {
    pub fn is_win(&self) -> bool {
        self.end == RoundEnd::Won
    }

    /// Score carried over as the high score: kept on a win, zero on a loss
    pub fn carried_score(&self) -> i32 {
        if self.is_win() {
            self.score
        } else {
            0
        }
    }
}

/// One playthrough: the snake, the apple, the board and the score.
///
/// Owned by a single driver which calls [`Round::tick`] once per interval
/// and forwards direction inputs in between.
#[derive(Debug)]
pub struct Round<R> {
    snake: Snake,
    apple: Apple<R>,
    board: Board,
    score: i32,
    ticks: u32,
    outcome: Outcome,
}

impl<R: Rng> Round<R> {
    /// Start a fresh round with the initial snake and a random apple
    pub fn new(config: &GameConfig, rng: R) -> Self {
        let snake = Snake::new();
        let apple = Apple::new(rng, snake.body());
        Self::from_parts(snake, apple, config.starting_score)
    }

    pub fn from_parts(snake: Snake, apple: Apple<R>, starting_score: i32) -> Self {
        info!(
            "round started: snake at {:?}, apple at {:?}, score {}",
            snake.head(),
            apple.position(),
            starting_score
        );

        Self {
            snake,
            apple,
            board: Board,
            score: starting_score,
            ticks: 0,
            outcome: Outcome::Continuing,
        }
    }

    /// Advance the simulation by one step.
    ///
    /// Once the round is over this does nothing and repeats the final outcome.
    pub fn tick(&mut self) -> Outcome {
        if self.outcome.is_terminal() {
            return self.outcome;
        }

        let outcome = self.snake.step(&mut self.apple);
        self.ticks += 1;
        self.outcome = outcome;

        debug!(
            "tick {}: {:?}, head {:?}, length {}",
            self.ticks,
            outcome,
            self.snake.head(),
            self.snake.len()
        );

        if outcome.is_terminal() {
            info!(
                "round over after {} ticks: {:?} with score {}",
                self.ticks, outcome, self.score
            );
        }

        outcome
    }

    /// A direction button was pressed. Costs one point whether or not the
    /// snake can actually turn that way. Ignored once the round is over.
    pub fn on_direction_input(&mut self, direction: Direction) {
        if self.is_finished() {
            debug!("input {:?} after round end ignored", direction);
            return;
        }

        self.score -= 1;

        if !self.snake.change_direction(direction) {
            debug!(
                "reverse turn {:?} while heading {:?} ignored",
                direction,
                self.snake.direction()
            );
        }
    }

    /// The final report, once the round has ended
    pub fn result(&self) -> Option<RoundResult> {
        let end = match self.outcome {
            Outcome::Continuing => return None,
            Outcome::Won => RoundEnd::Won,
            Outcome::Lost(collision) => RoundEnd::Lost(collision),
        };

        Some(RoundResult {
            end,
            score: self.score,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple_position(&self) -> Cell {
        self.apple.position()
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
