use log::trace;
use rand::Rng;

use super::board::{Board, Cell};

/// The apple and the random source it relocates with.
///
/// The generator is owned by the apple so a seeded one makes every
/// placement of a round reproducible.
#[derive(Debug)]
pub struct Apple<R> {
    position: Cell,
    rng: R,
}

impl<R: Rng> Apple<R> {
    /// Place a new apple on a random cell not covered by `snake_body`
    pub fn new(rng: R, snake_body: &[Cell]) -> Self {
        let mut apple = Self {
            position: Cell::new(0, 0),
            rng,
        };
        apple.regen(snake_body);
        apple
    }

    /// Place the apple at a known cell. Later placements still use `rng`.
    pub fn with_position(position: Cell, rng: R) -> Self {
        Self { position, rng }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Re-roll uniformly random cells until one is off the snake.
    ///
    /// The snake never covers the whole board (see `WIN_LENGTH`), so this
    /// terminates with probability 1.
    pub fn regen(&mut self, snake_body: &[Cell]) {
        debug_assert!(
            snake_body.len() < Board::CELLS,
            "no free cell left for the apple"
        );

        let mut rolls = 0u32;
        self.position = loop {
            rolls += 1;
            let candidate = Cell::new(
                self.rng.gen_range(0..Board::WIDTH),
                self.rng.gen_range(0..Board::HEIGHT),
            );

            if !snake_body.contains(&candidate) {
                break candidate;
            }
            trace!("apple re-roll: {:?} is under the snake", candidate);
        };

        trace!("apple placed at {:?} after {} roll(s)", self.position, rolls);
    }
}
