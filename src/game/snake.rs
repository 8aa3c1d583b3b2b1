use log::debug;
use rand::Rng;

use super::{
    apple::Apple,
    board::{Board, Cell},
    direction::Direction,
};

/// Length of a freshly spawned snake
pub const INITIAL_LENGTH: usize = 3;

/// Length at which the round is won
pub const WIN_LENGTH: usize = 10;

// The apple needs a free cell to respawn on after the winning bite.
const _: () = assert!(WIN_LENGTH < Board::CELLS);

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the board
    Border,
    /// Head entered a cell of its own body
    SelfBite,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continuing,
    Won,
    Lost(Collision),
}

impl Outcome {
    /// True once the round is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continuing)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    body: Vec<Cell>,
    /// Current direction of movement
    direction: Direction,
}

impl Snake {
    /// The starting snake: {(3,3), (2,3), (1,3)} heading right
    pub fn new() -> Self {
        Self::from_parts(
            vec![Cell::new(3, 3), Cell::new(2, 3), Cell::new(1, 3)],
            Direction::Right,
        )
    }

    /// Build a snake from an explicit body, head first.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn from_parts(body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "snake body must hold a head");
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (never the case for a constructed snake)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Turn towards `new_direction` unless it would reverse the snake onto
    /// its own neck. Returns whether the turn was taken.
    pub fn change_direction(&mut self, new_direction: Direction) -> bool {
        if self.direction.is_opposite(new_direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    /// Advance one cell in the current direction.
    ///
    /// Collisions leave the body untouched. The self check runs against the
    /// whole current body, including the tail cell that a plain move would
    /// vacate, so following your own tail is fatal.
    pub fn step<R: Rng>(&mut self, apple: &mut Apple<R>) -> Outcome {
        let new_head = self.head().moved_in_direction(self.direction);

        if !Board.contains(new_head) {
            return Outcome::Lost(Collision::Border);
        }

        if self.collides_with_body(new_head) {
            return Outcome::Lost(Collision::SelfBite);
        }

        self.body.insert(0, new_head);

        if new_head == apple.position() {
            apple.regen(&self.body);
            debug!("apple eaten, snake length is now {}", self.len());

            if self.len() == WIN_LENGTH {
                return Outcome::Won;
            }
        } else {
            self.body.pop();
        }

        Outcome::Continuing
    }

    fn collides_with_body(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn apple_at(x: i32, y: i32) -> Apple<StdRng> {
        Apple::with_position(Cell::new(x, y), StdRng::seed_from_u64(7))
    }

    fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new();
        assert_eq!(snake.len(), INITIAL_LENGTH);
        assert_eq!(snake.body(), cells(&[(3, 3), (2, 3), (1, 3)]).as_slice());
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    #[should_panic(expected = "snake body must hold a head")]
    fn test_empty_body_rejected() {
        Snake::from_parts(Vec::new(), Direction::Right);
    }

    #[test]
    fn test_change_direction_rejects_only_reversal() {
        for current in Direction::ALL {
            for requested in Direction::ALL {
                let mut snake = Snake::from_parts(vec![Cell::new(5, 5)], current);
                let accepted = snake.change_direction(requested);

                if requested == current.opposite() {
                    assert!(!accepted);
                    assert_eq!(snake.direction(), current);
                } else {
                    assert!(accepted);
                    assert_eq!(snake.direction(), requested);
                }
            }
        }
    }

    #[test]
    fn test_plain_move_translates_body() {
        let mut snake = Snake::new();
        let mut apple = apple_at(8, 8);

        let outcome = snake.step(&mut apple);

        assert_eq!(outcome, Outcome::Continuing);
        assert_eq!(snake.body(), cells(&[(4, 3), (3, 3), (2, 3)]).as_slice());
        assert_eq!(apple.position(), Cell::new(8, 8));
    }

    #[test]
    fn test_move_after_turn_follows_heading() {
        let mut snake = Snake::new();
        let mut apple = apple_at(8, 8);
        let before = snake.body().to_vec();

        snake.change_direction(Direction::Down);
        assert_eq!(snake.step(&mut apple), Outcome::Continuing);

        assert_eq!(snake.len(), before.len());
        assert_eq!(snake.head(), Cell::new(3, 4));
        // Every other segment takes the place of the one in front of it
        assert_eq!(&snake.body()[1..], &before[..before.len() - 1]);
    }

    #[test]
    fn test_eating_grows_and_moves_apple() {
        let mut snake = Snake::new();
        let mut apple = apple_at(4, 3);

        let outcome = snake.step(&mut apple);

        assert_eq!(outcome, Outcome::Continuing);
        assert_eq!(
            snake.body(),
            cells(&[(4, 3), (3, 3), (2, 3), (1, 3)]).as_slice()
        );
        assert_ne!(apple.position(), Cell::new(4, 3));
        assert!(!snake.body().contains(&apple.position()));
        assert!(Board.contains(apple.position()));
    }

    #[test]
    fn test_border_collision_leaves_body() {
        let body = cells(&[(0, 3), (1, 3), (2, 3)]);
        let mut snake = Snake::from_parts(body.clone(), Direction::Left);
        let mut apple = apple_at(8, 8);

        assert_eq!(snake.step(&mut apple), Outcome::Lost(Collision::Border));
        assert_eq!(snake.body(), body.as_slice());
    }

    #[test]
    fn test_border_collision_every_edge() {
        let cases = [
            (Cell::new(5, 0), Direction::Up),
            (Cell::new(5, 9), Direction::Down),
            (Cell::new(0, 5), Direction::Left),
            (Cell::new(9, 5), Direction::Right),
        ];

        for (head, direction) in cases {
            let mut snake = Snake::from_parts(vec![head], direction);
            let mut apple = apple_at(4, 4);
            assert_eq!(snake.step(&mut apple), Outcome::Lost(Collision::Border));
            assert_eq!(snake.body(), &[head]);
        }
    }

    #[test]
    fn test_self_collision_leaves_body() {
        // Head at (2,2) turning down into (2,3), the middle of the body
        let body = cells(&[(2, 2), (3, 2), (3, 3), (2, 3), (1, 3), (0, 3)]);
        let mut snake = Snake::from_parts(body.clone(), Direction::Down);
        let mut apple = apple_at(8, 8);

        assert_eq!(snake.step(&mut apple), Outcome::Lost(Collision::SelfBite));
        assert_eq!(snake.body(), body.as_slice());
    }

    #[test]
    fn test_entering_tail_cell_is_fatal() {
        // (2,3) is the tail and would be vacated by a plain move
        let body = cells(&[(2, 2), (3, 2), (3, 3), (2, 3)]);
        let mut snake = Snake::from_parts(body.clone(), Direction::Down);
        let mut apple = apple_at(8, 8);

        assert_eq!(snake.step(&mut apple), Outcome::Lost(Collision::SelfBite));
        assert_eq!(snake.body(), body.as_slice());
    }

    #[test]
    fn test_border_loss_keeps_apple() {
        let mut snake = Snake::from_parts(cells(&[(9, 0), (8, 0), (7, 0)]), Direction::Right);
        let mut apple = apple_at(9, 1);

        assert_eq!(snake.step(&mut apple), Outcome::Lost(Collision::Border));
        assert_eq!(apple.position(), Cell::new(9, 1));
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_reaching_win_length_wins() {
        // Nine cells along the top row, heading into the apple at (9,0)
        let body: Vec<Cell> = (0..9).rev().map(|x| Cell::new(x, 0)).collect();
        let mut snake = Snake::from_parts(body, Direction::Right);
        let mut apple = apple_at(9, 0);

        assert_eq!(snake.step(&mut apple), Outcome::Won);
        assert_eq!(snake.len(), WIN_LENGTH);
        assert!(!snake.body().contains(&apple.position()));
    }

    #[test]
    fn test_growing_below_win_length_continues() {
        let body: Vec<Cell> = (0..8).rev().map(|x| Cell::new(x, 0)).collect();
        let mut snake = Snake::from_parts(body, Direction::Right);
        let mut apple = apple_at(8, 0);

        assert_eq!(snake.step(&mut apple), Outcome::Continuing);
        assert_eq!(snake.len(), WIN_LENGTH - 1);
    }

    #[test]
    fn test_outcome_is_terminal() {
        assert!(!Outcome::Continuing.is_terminal());
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost(Collision::Border).is_terminal());
        assert!(Outcome::Lost(Collision::SelfBite).is_terminal());
    }
}
