use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// An RGB color triple
pub type Rgb = (u8, u8, u8);

/// Colors used by the renderer
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Theme {
    /// Board background
    pub background: Rgb,
    /// Snake body fill
    pub snake: Rgb,
    /// Apple fill
    pub apple: Rgb,
    /// Playfield border
    pub border: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: (0, 0, 0),
            snake: (0, 255, 0),
            apple: (255, 0, 0),
            border: (93, 216, 228),
        }
    }
}

/// Configuration for the game
///
/// Grid dimensions are derived: screen size divided by cell size, with the
/// remainder truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub screen_width: u32,
    /// Playfield height in pixels
    pub screen_height: u32,
    /// Side length of one grid cell in pixels
    pub cell_size: u32,
    /// Game speed in ticks per second
    pub tick_rate: u32,
    pub theme: Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            tick_rate: 20,
            theme: Theme::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration with custom geometry and speed
    pub fn new(screen_width: u32, screen_height: u32, cell_size: u32, tick_rate: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            cell_size,
            tick_rate,
            ..Default::default()
        }
    }

    pub fn grid_width(&self) -> usize {
        (self.screen_width / self.cell_size) as usize
    }

    pub fn grid_height(&self) -> usize {
        (self.screen_height / self.cell_size) as usize
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width(), self.grid_height())
    }

    /// Startup precondition check. A bad configuration fails here, before
    /// the game loop ever starts.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.screen_width > 0 && self.screen_height > 0,
            "screen dimensions must be positive"
        );
        ensure!(self.tick_rate > 0, "tick rate must be positive");
        ensure!(
            self.grid_width() > 0 && self.grid_height() > 0,
            "cell size {} does not fit a {}x{} screen",
            self.cell_size,
            self.screen_width,
            self.screen_height
        );
        // The apple needs a cell the snake does not occupy
        ensure!(
            self.grid_width() * self.grid_height() >= 2,
            "a {}x{} grid has no room for both the snake and the apple",
            self.grid_width(),
            self.grid_height()
        );
        Ok(())
    }
}
