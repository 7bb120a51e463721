use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GridSize, clamp_fruit_count};
use crate::fruit;
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver,
    Victory,
}

impl GameStatus {
    /// Returns `Some(won)` once the session has ended.
    #[must_use]
    pub fn ended(self) -> Option<bool> {
        match self {
            Self::Playing => None,
            Self::GameOver => Some(false),
            Self::Victory => Some(true),
        }
    }

    /// Returns true when no further moves can change the session.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.ended().is_some()
    }
}

/// Result of submitting one direction intent to [`GameState::step`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepOutcome {
    /// The move was applied and the game continues.
    Moved,
    /// This move ended the game.
    GameOver { won: bool },
    /// The game was already over; nothing was checked or mutated.
    AlreadyOver { won: bool },
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub fruits: Vec<Position>,
    pub status: GameStatus,
    max_fruits: usize,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh session with entropy-seeded fruit placement.
    #[must_use]
    pub fn new(bounds: GridSize, max_fruits: usize) -> Self {
        Self::with_rng(bounds, max_fruits, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, max_fruits: usize, seed: u64) -> Self {
        Self::with_rng(bounds, max_fruits, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, max_fruits: usize, rng: StdRng) -> Self {
        let mut state = Self {
            snake: Snake::new(start_position(bounds), Direction::Right),
            fruits: Vec::new(),
            status: GameStatus::Playing,
            max_fruits,
            bounds,
            rng,
        };
        state.reset();
        state
    }

    /// Returns the grid bounds this session plays on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Returns the configured concurrent fruit count.
    #[must_use]
    pub fn max_fruits(&self) -> usize {
        self.max_fruits
    }

    /// Applies one direction intent and advances the game by one step.
    ///
    /// Terminal sessions replay their outcome without touching any state.
    /// A 180° reversal of the current heading is substituted by the current
    /// heading before the move is evaluated.
    pub fn step(&mut self, requested: Direction) -> StepOutcome {
        if let Some(won) = self.status.ended() {
            return StepOutcome::AlreadyOver { won };
        }

        let direction = self.snake.resolve_direction(requested);
        let next_head = self.snake.next_head(direction);

        // The fatal move is never applied: collisions are checked against
        // the pre-move body, so the tail tile about to be vacated still
        // counts as occupied this step.
        if !next_head.is_within_bounds(self.bounds) || self.snake.body_contains(next_head) {
            let won = self.board_is_full();
            self.status = if won {
                GameStatus::Victory
            } else {
                GameStatus::GameOver
            };
            return StepOutcome::GameOver { won };
        }

        self.snake.advance(direction);
        let ate = self.consume_fruit_at(next_head);
        if !ate {
            self.snake.retract_tail();
        }
        self.snake.expire_bulge();

        StepOutcome::Moved
    }

    /// Adds one fruit on a random free tile.
    ///
    /// Returns the new fruit's tile, or `None` when the board has no free
    /// tile left.
    pub fn spawn_fruit(&mut self) -> Option<Position> {
        let position = fruit::spawn_position(&mut self.rng, self.bounds, &self.snake, &self.fruits)?;
        self.fruits.push(position);
        Some(position)
    }

    /// Stores a clamped fruit count that takes effect on the next reset.
    ///
    /// Fruit already on the board is left untouched.
    pub fn set_max_fruits(&mut self, requested: i64) -> usize {
        self.max_fruits = clamp_fruit_count(requested);
        self.max_fruits
    }

    /// Reinitializes the session: head back at the start tile, empty body,
    /// heading right, and `max_fruits` freshly spawned fruit.
    pub fn reset(&mut self) {
        self.snake = Snake::new(start_position(self.bounds), Direction::Right);
        self.status = GameStatus::Playing;
        self.fruits.clear();

        for _ in 0..self.max_fruits {
            if self.spawn_fruit().is_none() {
                break;
            }
        }
    }

    /// True when the snake covers every tile on the board.
    fn board_is_full(&self) -> bool {
        1 + self.snake.body_len() >= self.bounds.total_cells()
    }

    fn consume_fruit_at(&mut self, position: Position) -> bool {
        let Some(index) = self.fruits.iter().position(|fruit| *fruit == position) else {
            return false;
        };

        self.fruits.remove(index);
        self.snake.begin_bulge();
        self.spawn_fruit();
        true
    }
}

/// The fixed start tile: the grid center.
fn start_position(bounds: GridSize) -> Position {
    Position {
        x: i32::from(bounds.width / 2),
        y: i32::from(bounds.height / 2),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{GameState, GameStatus, StepOutcome};

    const GRID: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn playing_state() -> GameState {
        GameState::new_with_seed(GRID, 1, 1)
    }

    #[test]
    fn new_session_starts_at_grid_center() {
        let state = playing_state();

        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.snake.body_len(), 0);
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.fruits.len(), 1);
    }

    #[test]
    fn snake_grows_after_eating_fruit() {
        let mut state = playing_state();
        state.snake = Snake::new(Position { x: 1, y: 1 }, Direction::Right);
        state.fruits = vec![Position { x: 2, y: 1 }];

        let outcome = state.step(Direction::Right);

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
        assert_eq!(state.snake.body_len(), 1);
        assert_eq!(state.snake.bulge_index(), Some(0));
        // The eaten fruit was replaced somewhere free.
        assert_eq!(state.fruits.len(), 1);
        assert!(!state.snake.occupies(state.fruits[0]));
    }

    #[test]
    fn body_length_is_constant_without_fruit() {
        let mut state = playing_state();
        state.fruits = vec![Position { x: 0, y: 0 }];

        for _ in 0..3 {
            state.step(Direction::Right);
            assert_eq!(state.snake.body_len(), 0);
        }
    }

    #[test]
    fn wall_collision_sets_game_over() {
        let mut state = playing_state();
        state.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        state.fruits = vec![Position { x: 0, y: 0 }];

        for _ in 0..5 {
            assert_eq!(state.step(Direction::Up), StepOutcome::Moved);
        }
        assert_eq!(state.snake.head(), Position { x: 5, y: 0 });

        // The sixth move would leave the board at y = -1.
        assert_eq!(state.step(Direction::Up), StepOutcome::GameOver { won: false });
        assert_eq!(state.status, GameStatus::GameOver);
        // The fatal move was not applied.
        assert_eq!(state.snake.head(), Position { x: 5, y: 0 });
    }

    #[test]
    fn self_collision_sets_game_over() {
        let mut state = playing_state();
        // Turning up into a hook of trailing segments; the tile above the
        // head is still occupied this step.
        state.snake = Snake::from_parts(
            Position { x: 2, y: 2 },
            vec![
                Position { x: 1, y: 2 },
                Position { x: 1, y: 1 },
                Position { x: 2, y: 1 },
                Position { x: 3, y: 1 },
            ],
            Direction::Right,
        );
        state.fruits = vec![Position { x: 9, y: 9 }];

        let outcome = state.step(Direction::Up);

        assert_eq!(outcome, StepOutcome::GameOver { won: false });
        assert_eq!(state.snake.head(), Position { x: 2, y: 2 });
    }

    #[test]
    fn vacating_tail_tile_still_blocks_the_move() {
        let mut state = playing_state();
        // A 2×2 loop: the head would re-enter the tail tile that is about
        // to be vacated. The strict rule rejects the move.
        state.snake = Snake::from_parts(
            Position { x: 2, y: 2 },
            vec![
                Position { x: 3, y: 2 },
                Position { x: 3, y: 3 },
                Position { x: 2, y: 3 },
            ],
            Direction::Left,
        );
        state.fruits = vec![Position { x: 9, y: 9 }];

        assert_eq!(
            state.step(Direction::Down),
            StepOutcome::GameOver { won: false }
        );
    }

    #[test]
    fn reversal_keeps_current_heading() {
        let mut state = playing_state();
        state.snake = Snake::new(Position { x: 5, y: 5 }, Direction::Right);
        state.fruits = vec![Position { x: 0, y: 0 }];

        let outcome = state.step(Direction::Left);

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(state.snake.head(), Position { x: 6, y: 5 });
        assert_eq!(state.snake.direction(), Direction::Right);
    }

    #[test]
    fn terminal_session_replays_outcome_without_mutation() {
        let mut state = playing_state();
        state.snake = Snake::new(Position { x: 9, y: 5 }, Direction::Right);
        state.fruits = vec![Position { x: 0, y: 0 }];

        assert_eq!(
            state.step(Direction::Right),
            StepOutcome::GameOver { won: false }
        );

        let head = state.snake.head();
        let fruits = state.fruits.clone();

        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(
                state.step(direction),
                StepOutcome::AlreadyOver { won: false }
            );
        }

        assert_eq!(state.snake.head(), head);
        assert_eq!(state.snake.body_len(), 0);
        assert_eq!(state.fruits, fruits);
    }

    #[test]
    fn collision_on_full_board_reports_victory() {
        let tiny = GridSize {
            width: 2,
            height: 2,
        };
        let mut state = GameState::new_with_seed(tiny, 1, 5);
        // Head plus three trailing segments cover all four tiles.
        state.snake = Snake::from_parts(
            Position { x: 0, y: 0 },
            vec![
                Position { x: 1, y: 0 },
                Position { x: 1, y: 1 },
                Position { x: 0, y: 1 },
            ],
            Direction::Up,
        );
        state.fruits.clear();

        let outcome = state.step(Direction::Up);

        assert_eq!(outcome, StepOutcome::GameOver { won: true });
        assert_eq!(state.status, GameStatus::Victory);
        assert_eq!(state.step(Direction::Down), StepOutcome::AlreadyOver { won: true });
    }

    #[test]
    fn bulge_advances_and_expires_over_following_steps() {
        let mut state = playing_state();
        state.snake = Snake::from_parts(
            Position { x: 2, y: 5 },
            vec![
                Position { x: 1, y: 5 },
                Position { x: 1, y: 6 },
                Position { x: 1, y: 7 },
            ],
            Direction::Right,
        );
        state.fruits = vec![Position { x: 3, y: 5 }];

        state.step(Direction::Right);
        assert_eq!(state.snake.bulge_index(), Some(0));
        assert_eq!(state.snake.body_len(), 4);

        // Park the replacement fruit away from the path.
        state.fruits = vec![Position { x: 9, y: 9 }];

        state.step(Direction::Right);
        assert_eq!(state.snake.bulge_index(), Some(2));

        state.step(Direction::Right);
        // Index 4 reaches the tail of a four-segment body.
        assert_eq!(state.snake.bulge_index(), None);
    }

    #[test]
    fn manual_spawn_and_fruit_count_are_independent() {
        let mut state = playing_state();
        assert_eq!(state.fruits.len(), 1);

        let spawned = state.spawn_fruit().expect("board has free tiles");
        assert_eq!(state.fruits.len(), 2);
        assert!(!state.snake.occupies(spawned));

        // A new count applies on the next reset only.
        assert_eq!(state.set_max_fruits(5), 5);
        assert_eq!(state.fruits.len(), 2);

        state.reset();
        assert_eq!(state.fruits.len(), 5);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn reset_restores_the_initial_layout() {
        let mut state = playing_state();
        state.step(Direction::Down);
        state.step(Direction::Left);

        state.reset();

        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.snake.body_len(), 0);
        assert_eq!(state.snake.bulge_index(), None);
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.fruits.len(), 1);
    }
}
