use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, Position, RunState, Speed};
use crate::metrics::GameMetrics;

const BOARD_BG: Color = Color::Rgb(0xe6, 0xff, 0xe6);
const HEAD_FG: Color = Color::Rgb(0x38, 0x76, 0x1d);
const BODY_FG: Color = Color::Rgb(0x6a, 0xa8, 0x4f);
const FOOD_FG: Color = Color::Red;

/// `"{ng} / {limit}"` readout
pub fn ng_readout(state: &GameState) -> String {
    format!("{} / {}", state.ng_count, state.ng_limit)
}

/// Label of the start control; becomes "Restart" once a game has ended
pub fn start_label(metrics: &GameMetrics) -> &'static str {
    if metrics.games_played > 0 {
        "Restart"
    } else {
        "Start"
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics, speed: Speed) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(1), // Message
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics, speed);
        frame.render_widget(stats, chunks[0]);

        // Center the board horizontally
        let board_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        let board = self.render_board(board_area, state);
        frame.render_widget(board, board_area);

        frame.render_widget(self.render_message(state, metrics), chunks[2]);
        frame.render_widget(self.render_controls(metrics), chunks[3]);
    }

    fn render_board(&self, _area: Rect, state: &GameState) -> Paragraph<'_> {
        let background = Style::default().bg(BOARD_BG);
        let tiles = state.tile_count();
        let mut lines = Vec::with_capacity(tiles as usize);

        // Segments pushed off the board by a wall hit simply fall outside this loop
        for row in 0..tiles {
            let mut spans = Vec::with_capacity(tiles as usize);

            for col in 0..tiles {
                let pos = Position::new(col * state.cell_size, row * state.cell_size);

                let cell = if pos == state.snake.head() {
                    Span::styled("██", background.fg(HEAD_FG))
                } else if state.snake.occupies(pos) {
                    Span::styled("██", background.fg(BODY_FG))
                } else if pos == state.food {
                    Span::styled("● ", background.fg(FOOD_FG).add_modifier(Modifier::BOLD))
                } else {
                    Span::styled("  ", background)
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics, speed: Speed) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let ng_style = if state.ng_count + 1 >= state.ng_limit {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            value
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("NG: ", label),
            Span::styled(ng_readout(state), ng_style),
            Span::raw("    "),
            Span::styled("Speed: ", label),
            Span::styled(speed.label(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_message(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let line = match (state.run_state, state.message()) {
            (RunState::GameOver, Some(message)) => Line::from(vec![
                Span::styled(
                    message,
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  Final Score: {}", state.score),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            (RunState::Idle, _) => Line::from(Span::styled(
                "Press Enter to start",
                Style::default().fg(Color::Gray),
            )),
            _ => Line::from(Span::styled(
                format!(
                    "wall hits {}  self hits {}  food {}",
                    metrics.wall_hits, metrics.self_hits, metrics.food_eaten
                ),
                Style::default().fg(Color::DarkGray),
            )),
        };

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn render_controls(&self, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(format!(" {} | ", start_label(metrics))),
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" move | "),
            Span::styled("1 2 3", Style::default().fg(Color::Cyan)),
            Span::raw(" slow/normal/fast | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
