use std::fmt::Write as _;

use crossterm::style::Stylize;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::board::Cell;
use crate::game::GameState;
use crate::theme::{self, Theme};

/// Renders the full game frame from immutable state: a score line above the
/// bordered glyph grid, anchored top-left.
pub fn render(frame: &mut Frame<'_>, state: &GameState, theme: &Theme) {
    let grid = state.board().grid();

    let [score_row, board_rows, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(grid.rows.saturating_add(2)),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    let [board_area, _] = Layout::horizontal([
        Constraint::Length(grid.cols.saturating_add(2)),
        Constraint::Min(0),
    ])
    .areas(board_rows);

    frame.render_widget(
        Paragraph::new(format!("Score: {}", state.score()))
            .style(Style::new().fg(theme.chrome)),
        score_row,
    );

    let block = Block::bordered().border_style(Style::new().fg(theme.chrome));
    frame.render_widget(
        Paragraph::new(board_lines(state, theme)).block(block),
        board_area,
    );
}

fn board_lines(state: &GameState, theme: &Theme) -> Vec<Line<'static>> {
    let grid = state.board().grid();
    let mut lines = Vec::with_capacity(usize::from(grid.rows));

    for row in 0..i32::from(grid.rows) {
        let spans: Vec<Span<'static>> = (0..i32::from(grid.cols))
            .map(|col| {
                let cell = state.board().cell(crate::snake::Position { row, col });
                let mut style = Style::new().fg(theme::cell_color(cell, theme));
                if cell == Cell::Head {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Span::styled(theme::cell_glyph(cell), style)
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}

/// Renders the board as an ANSI-styled string for the post-session printout,
/// after the alternate screen is gone.
#[must_use]
pub fn final_screen(state: &GameState) -> String {
    let grid = state.board().grid();
    let cols = usize::from(grid.cols);
    let mut out = String::new();

    let _ = writeln!(out, "Score: {}", state.score());
    let _ = writeln!(out, "\u{250c}{}\u{2510}", "\u{2500}".repeat(cols));

    for row in 0..i32::from(grid.rows) {
        out.push('\u{2502}');
        for col in 0..i32::from(grid.cols) {
            let cell = state.board().cell(crate::snake::Position { row, col });
            let glyph = theme::cell_glyph(cell);
            let styled = match cell {
                Cell::Empty => glyph.dark_grey(),
                Cell::Food => glyph.cyan(),
                Cell::Head => glyph.green().bold(),
                Cell::Body { .. } => glyph.green(),
            };
            let _ = write!(out, "{styled}");
        }
        out.push('\u{2502}');
        out.push('\n');
    }

    let _ = writeln!(out, "\u{2514}{}\u{2518}", "\u{2500}".repeat(cols));
    out
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::config::GameConfig;
    use crate::game::GameState;
    use crate::snake::Position;
    use crate::theme::THEME_CLASSIC;

    use super::{final_screen, render};

    fn test_state() -> GameState {
        let config = GameConfig::new(4, 8, 3).expect("test config should validate");
        GameState::new_with_seed(config, 1)
    }

    #[test]
    fn frame_shows_score_border_and_markers() {
        let state = test_state();
        let backend = TestBackend::new(20, 10);
        let mut terminal = Terminal::new(backend).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &state, &THEME_CLASSIC))
            .expect("draw succeeds");

        let buffer = terminal.backend().buffer();

        // Score line at the top.
        assert_eq!(buffer[(0, 0)].symbol(), "S");
        assert_eq!(buffer[(7, 0)].symbol(), "0");

        // Plain box-drawing border around the 8x4 grid.
        assert_eq!(buffer[(0, 1)].symbol(), "\u{250c}");
        assert_eq!(buffer[(9, 1)].symbol(), "\u{2510}");
        assert_eq!(buffer[(0, 6)].symbol(), "\u{2514}");
        assert_eq!(buffer[(9, 6)].symbol(), "\u{2518}");
        assert_eq!(buffer[(4, 1)].symbol(), "\u{2500}");
        assert_eq!(buffer[(0, 3)].symbol(), "\u{2502}");

        // Head at grid (2, 4) -> one cell in from the border.
        assert_eq!(buffer[(5, 4)].symbol(), "\u{235f}");
        // Body straights behind it.
        assert_eq!(buffer[(4, 4)].symbol(), "\u{2500}");
        assert_eq!(buffer[(3, 4)].symbol(), "\u{2500}");

        // Exactly one food glyph inside the border.
        let food = state.food().expect("fresh game has food");
        let screen_x = u16::try_from(food.col).expect("in bounds") + 1;
        let screen_y = u16::try_from(food.row).expect("in bounds") + 2;
        assert_eq!(buffer[(screen_x, screen_y)].symbol(), "\u{66d}");
    }

    #[test]
    fn final_screen_prints_score_and_bordered_rows() {
        let mut state = test_state();
        state.set_food(Position { row: 0, col: 0 });

        let text = final_screen(&state);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + 1 + 4 + 1);
        assert_eq!(lines[0], "Score: 0");
        assert_eq!(lines[1], "\u{250c}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2510}");
        assert_eq!(lines[6], "\u{2514}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2518}");
        for interior in &lines[2..=5] {
            assert!(interior.starts_with('\u{2502}'));
            assert!(interior.ends_with('\u{2502}'));
        }
    }
}
