use super::config::{Rgb, Theme};
use super::direction::Direction;
use super::grid::Cell;

/// The snake
///
/// `body` is head-first. `length` is the target size; the body catches up to
/// it over subsequent ticks, which is how growth is deferred by one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Target body size
    pub length: usize,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// A fresh snake: a single segment at `head`
    pub fn spawn(head: Cell, direction: Direction) -> Self {
        Self {
            body: vec![head],
            length: 1,
            direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Push a new head and trim the tail unless the body is still catching
    /// up to `length`
    pub fn advance(&mut self, new_head: Cell) {
        self.body.insert(0, new_head);
        if self.body.len() > self.length {
            self.body.pop();
        }
    }

    /// Whether the tail segment will be dropped by the next `advance`
    pub fn vacates_tail(&self) -> bool {
        self.body.len() >= self.length
    }

    /// Check whether `cell` hits the body. With `exclude_tail` the last
    /// segment is ignored, so moving into a cell being vacated this tick
    /// is legal.
    pub fn hits_body(&self, cell: Cell, exclude_tail: bool) -> bool {
        let checked = if exclude_tail {
            &self.body[..self.body.len() - 1]
        } else {
            &self.body[..]
        };
        checked.contains(&cell)
    }

    /// Check whether any segment occupies `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Completes the `len`/`is_empty` pair; the body always holds at least
    /// the head, so this is false for any constructible snake
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// The single apple on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub cell: Cell,
}

/// Anything the renderer can paint: a set of occupied cells plus the theme
/// color to fill them with.
pub trait Drawable {
    fn cells(&self) -> &[Cell];
    fn color(&self, theme: &Theme) -> Rgb;
}

impl Drawable for Snake {
    fn cells(&self) -> &[Cell] {
        &self.body
    }

    fn color(&self, theme: &Theme) -> Rgb {
        theme.snake
    }
}

impl Drawable for Apple {
    fn cells(&self) -> &[Cell] {
        std::slice::from_ref(&self.cell)
    }

    fn color(&self, theme: &Theme) -> Rgb {
        theme.apple
    }
}

/// Complete game state, owned and mutated only by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub score: u32,
    pub ticks: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn() {
        let snake = Snake::spawn(Cell::new(16, 12), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.length, 1);
        assert_eq!(snake.head(), Cell::new(16, 12));
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_advance_shifts_body() {
        let mut snake = Snake::spawn(Cell::new(5, 5), Direction::Right);
        snake.advance(Cell::new(6, 5));
        assert_eq!(snake.body, vec![Cell::new(6, 5)]);

        snake.advance(Cell::new(7, 5));
        assert_eq!(snake.body, vec![Cell::new(7, 5)]);
    }

    #[test]
    fn test_advance_catches_up_to_length() {
        let mut snake = Snake::spawn(Cell::new(5, 5), Direction::Right);
        snake.length = 3;

        snake.advance(Cell::new(6, 5));
        assert_eq!(snake.len(), 2);
        snake.advance(Cell::new(7, 5));
        assert_eq!(snake.len(), 3);

        // Caught up; from here on movement is a shift
        snake.advance(Cell::new(8, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.body,
            vec![Cell::new(8, 5), Cell::new(7, 5), Cell::new(6, 5)]
        );
    }

    #[test]
    fn test_hits_body_tail_exclusion() {
        let snake = Snake {
            body: vec![Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)],
            length: 3,
            direction: Direction::Right,
        };

        assert!(snake.hits_body(Cell::new(4, 5), true));
        // The tail cell is vacated this tick, so it does not count
        assert!(!snake.hits_body(Cell::new(3, 5), true));
        assert!(snake.hits_body(Cell::new(3, 5), false));
        assert!(!snake.hits_body(Cell::new(10, 10), false));
    }

    #[test]
    fn test_vacates_tail_during_growth() {
        let mut snake = Snake::spawn(Cell::new(5, 5), Direction::Right);
        assert!(snake.vacates_tail());

        // Mid-growth the tail stays put
        snake.length = 2;
        assert!(!snake.vacates_tail());
        snake.advance(Cell::new(6, 5));
        assert!(snake.vacates_tail());
    }

    #[test]
    fn test_drawable_cells() {
        let theme = Theme::default();
        let snake = Snake::spawn(Cell::new(1, 1), Direction::Up);
        let apple = Apple {
            cell: Cell::new(3, 3),
        };

        assert_eq!(snake.cells(), &[Cell::new(1, 1)]);
        assert_eq!(apple.cells(), &[Cell::new(3, 3)]);
        assert_eq!(snake.color(&theme), theme.snake);
        assert_eq!(apple.color(&theme), theme.apple);
    }
}
