use rand::rngs::ThreadRng;
use rand::Rng;

use super::{
    config::GameConfig,
    direction::Direction,
    grid::{Cell, Grid},
    state::{Apple, GameState, Snake},
};

/// What happened during a tick, for the driver's stats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Whether the snake collided with itself and was reset
    pub reset: bool,
}

/// The game engine that handles all game logic
///
/// Generic over the RNG so tests can inject a seeded one; the default is the
/// thread-local generator.
pub struct GameEngine<R: Rng = ThreadRng> {
    grid: Grid,
    rng: R,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with an explicit random source
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        Self {
            grid: config.grid(),
            rng,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// A fresh game: a length-1 snake at the grid center with a random
    /// heading, and the apple on a free cell
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::spawn(self.grid.center(), Direction::random(&mut self.rng));
        let apple = Apple {
            cell: self.free_cell(&snake),
        };

        GameState {
            snake,
            apple,
            score: 0,
            ticks: 0,
        }
    }

    /// Advance the game by exactly one tick
    pub fn tick(&mut self, state: &mut GameState, requested: Option<Direction>) -> TickOutcome {
        // Resolve the requested direction. Reversals are dropped here every
        // tick, even though the input layer already filters them.
        if let Some(dir) = requested {
            if !state.snake.direction.is_opposite(dir) {
                state.snake.direction = dir;
            }
        }

        let new_head = self.grid.step(state.snake.head(), state.snake.direction);
        state.ticks += 1;

        // Self-collision sends the snake back to the start. The tail cell is
        // excluded when it is being vacated this tick, so tail-chasing is
        // legal.
        if state.snake.hits_body(new_head, state.snake.vacates_tail()) {
            self.reset(state);
            return TickOutcome {
                ate_apple: false,
                reset: true,
            };
        }

        state.snake.advance(new_head);

        let ate_apple = new_head == state.apple.cell;
        if ate_apple {
            state.snake.length += 1;
            state.score += 1;
            state.apple.cell = self.free_cell(&state.snake);
        }

        TickOutcome {
            ate_apple,
            reset: false,
        }
    }

    /// Replace the snake with a fresh one. The apple moves only if the reset
    /// snake spawned on top of it.
    fn reset(&mut self, state: &mut GameState) {
        state.snake = Snake::spawn(self.grid.center(), Direction::random(&mut self.rng));
        state.score = 0;

        if state.snake.occupies(state.apple.cell) {
            state.apple.cell = self.free_cell(&state.snake);
        }
    }

    /// A random cell not occupied by the snake, by rejection sampling
    fn free_cell(&mut self, snake: &Snake) -> Cell {
        loop {
            let cell = Cell::new(
                self.rng.gen_range(0..self.grid.width as i32),
                self.rng.gen_range(0..self.grid.height as i32),
            );

            if !snake.occupies(cell) {
                return cell;
            }
        }
    }
}
