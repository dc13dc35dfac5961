//! The terminal loop driver: owns the terminal, the clocks, and the select
//! loop. All game logic stays in [`crate::game`]; this module only feeds it
//! one accepted direction request per tick and draws the result.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::stats::SessionStats;

/// Drawing rate; the game tick rate is configured separately
const RENDER_FPS: u64 = 30;

pub struct App {
    engine: GameEngine,
    state: GameState,
    stats: SessionStats,
    renderer: Renderer,
    input: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(&config);
        let state = engine.new_game();
        let renderer = Renderer::new(config.theme, engine.grid());

        Self {
            engine,
            state,
            stats: SessionStats::new(),
            renderer,
            input: InputHandler::new(),
            tick_interval: Duration::from_secs_f64(1.0 / f64::from(config.tick_rate)),
            should_quit: false,
            pending_direction: None,
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

        let mut tick_timer = interval(self.tick_interval);
        let mut render_timer = interval(Duration::from_millis(1000 / RENDER_FPS));

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.stats);
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

            match self.input.map_key(key) {
                KeyAction::Turn(dir) => {
                    // The last valid request in a tick's event batch wins
                    if let Some(dir) = self.input.accept(self.state.snake.direction, dir) {
                        self.pending_direction = Some(dir);
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn tick(&mut self) {
        let requested = self.pending_direction.take();
        let outcome = self.engine.tick(&mut self.state, requested);

        if outcome.ate_apple {
            self.stats.on_apple(self.state.score);
        }
        if outcome.reset {
            self.stats.on_reset();
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
