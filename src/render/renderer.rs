use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::game::{Cell, Drawable, GameState, Grid, Rgb, Theme};
use crate::stats::SessionStats;

fn color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb;
    Color::Rgb(r, g, b)
}

pub struct Renderer {
    theme: Theme,
    grid: Grid,
}

impl Renderer {
    pub fn new(theme: Theme, grid: Grid) -> Self {
        Self { theme, grid }
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats_line = self.render_stats(chunks[0], state, stats);
        frame.render_widget(stats_line, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let grid = self.render_grid(game_area, state);
        frame.render_widget(grid, game_area);

        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        // Paint the drawables into a per-cell fill map, snake over apple
        let mut fill = vec![vec![None; self.grid.width]; self.grid.height];
        for drawable in [&state.apple as &dyn Drawable, &state.snake] {
            let fill_color = drawable.color(&self.theme);
            for cell in drawable.cells() {
                fill[cell.row as usize][cell.col as usize] = Some(fill_color);
            }
        }

        let head = state.snake.head();
        let mut lines = Vec::with_capacity(self.grid.height);

        for row in 0..self.grid.height {
            let mut spans = Vec::with_capacity(self.grid.width);

            for col in 0..self.grid.width {
                let span = match fill[row][col] {
                    Some(fill_color) => {
                        let mut style = Style::default().fg(color(fill_color));
                        if Cell::new(col as i32, row as i32) == head {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        Span::styled("■ ", style)
                    }
                    None => Span::styled(". ", Style::default().fg(Color::DarkGray)),
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .style(Style::default().bg(color(self.theme.background)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(color(self.theme.border)))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, _area: Rect, state: &GameState, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                stats.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Length: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.snake.length.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Resets: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.resets.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}
