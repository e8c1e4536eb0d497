use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{Game, Position, Rgb};
use crate::metrics::GameMetrics;

/// What occupies one playfield cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Food(Rgb),
    Body(Rgb),
    Head,
}

const HEAD_COLOR: Color = Color::Cyan;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &Game, metrics: &GameMetrics) {
        let [header, middle, footer] = screen_layout(frame.area());

        frame.render_widget(self.render_stats(game, metrics), header);
        frame.render_widget(self.render_controls(), footer);

        let config = game.config();
        // One column per cell, two cells per line via half blocks
        let field_width = config.columns() as u16 + 2;
        if middle.width < field_width || middle.height < 3 {
            let need = (field_width, 5);
            frame.render_widget(self.render_too_small(need, frame.area()), middle);
            return;
        }

        let [game_area] = Layout::horizontal([Constraint::Length(field_width)])
            .flex(Flex::Center)
            .areas(middle);
        frame.render_widget(self.render_grid(game, game_area.height), game_area);

        if !game.is_alive() {
            let overlay = game_over_area(middle);
            frame.render_widget(Clear, overlay);
            frame.render_widget(self.render_game_over(game, metrics), overlay);
        }
    }

    /// Playfield, scrolled vertically to keep the head in view when it does not fit
    fn render_grid(&self, game: &Game, height: u16) -> Paragraph<'_> {
        let grid = cell_grid(game);
        let visible_rows = usize::from(height.saturating_sub(2)) * 2;
        let config = game.config();
        let head_row = game.snake().head().position().y.div_euclid(config.block_width);
        let offset = viewport_offset(grid.len(), visible_rows, head_row);

        let lines: Vec<Line> = grid[offset..]
            .chunks(2)
            .take(visible_rows / 2)
            .map(|pair| {
                let empty = vec![Cell::Empty; pair[0].len()];
                let bottom = pair.get(1).unwrap_or(&empty);
                Line::from(
                    pair[0]
                        .iter()
                        .zip(bottom)
                        .map(|(&top, &bottom)| half_block(top, bottom))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        let title = if grid.len() > visible_rows {
            format!(" Snake (rows {}-{}) ", offset, offset + visible_rows - 1)
        } else {
            " Snake ".to_string()
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
    }

    fn render_too_small(&self, (width, height): (u16, u16), area: Rect) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "need {}x{}, have {}x{}",
                width, height, area.width, area.height
            )),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_stats(&self, game: &Game, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.best_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Food: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.food_eaten.to_string(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, game: &Game, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(Span::styled(
                "Game over",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    game.score().to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Rounds: {}  Food eaten: {}",
                metrics.games_played, metrics.food_eaten
            )),
            Line::from(vec![
                Span::styled("R", Style::default().fg(Color::Green)),
                Span::raw(" restart  "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Playfield as rows of cells; off-field segments are skipped
fn cell_grid(game: &Game) -> Vec<Vec<Cell>> {
    let config = game.config();
    let mut grid = vec![vec![Cell::Empty; config.columns() as usize]; config.rows() as usize];

    let mut put = |pos: Position, cell: Cell| {
        if config.is_in_bounds(pos.x, pos.y) {
            let row = (pos.y / config.block_width) as usize;
            let col = (pos.x / config.block_width) as usize;
            grid[row][col] = cell;
        }
    };

    let food = game.food().block();
    put(food.position(), Cell::Food(food.color()));
    for segment in game.snake().segments() {
        put(segment.position(), Cell::Body(segment.color()));
    }
    let head = game.snake().head();
    put(head.position(), Cell::Head);

    grid
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

fn screen_layout(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(0),    // Playfield
        Constraint::Length(1), // Footer
    ])
    .areas(area)
}

fn game_over_area(middle: Rect) -> Rect {
    centered(middle, 32, 6)
}

/// First grid row shown when `visible` of `rows` fit, centring `focus` where possible
fn viewport_offset(rows: usize, visible: usize, focus: i32) -> usize {
    if rows <= visible {
        return 0;
    }
    let max = (rows - visible) as i32;
    (focus - visible as i32 / 2).clamp(0, max) as usize
}

/// Two vertically stacked cells in one terminal cell
fn half_block(top: Cell, bottom: Cell) -> Span<'static> {
    match (cell_color(top), cell_color(bottom)) {
        (None, None) => Span::raw(" "),
        (Some(top), None) => Span::styled("▀", Style::default().fg(top)),
        (None, Some(bottom)) => Span::styled("▄", Style::default().fg(bottom)),
        (Some(top), Some(bottom)) => Span::styled("▀", Style::default().fg(top).bg(bottom)),
    }
}

fn cell_color(cell: Cell) -> Option<Color> {
    match cell {
        Cell::Empty => None,
        Cell::Food(rgb) | Cell::Body(rgb) => Some(to_color(rgb)),
        Cell::Head => Some(HEAD_COLOR),
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}
