use ratatui::style::Color;

use crate::board::Cell;
use crate::input::Direction;

/// Snake head glyph.
pub const GLYPH_HEAD: &str = "\u{235f}"; // ⍟

/// Food glyph.
pub const GLYPH_FOOD: &str = "\u{66d}"; // ٭

/// Empty-cell glyph.
pub const GLYPH_BLANK: &str = "\u{b7}"; // ·

/// A color theme applied to the rendered board.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub food: Color,
    pub snake: Color,
    pub blank: Color,
    /// Border and score line; `Reset` keeps the terminal default.
    pub chrome: Color,
}

/// The classic look: cyan food, green snake, gray blanks.
pub const THEME_CLASSIC: Theme = Theme {
    food: Color::Cyan,
    snake: Color::Green,
    blank: Color::DarkGray,
    chrome: Color::Reset,
};

/// Picks the box-drawing glyph for a body cell from the direction pair that
/// carried the snake through it: the incoming arm points back where the
/// snake came from, the outgoing arm points where it went.
#[must_use]
pub fn body_glyph(incoming: Direction, outgoing: Direction) -> &'static str {
    use Direction::{Down, Left, Right, Up};

    match (incoming, outgoing) {
        (Up, Right) | (Left, Down) => "\u{250c}",   // ┌
        (Up, Left) | (Right, Down) => "\u{2510}",   // ┐
        (Down, Right) | (Left, Up) => "\u{2514}",   // └
        (Down, Left) | (Right, Up) => "\u{2518}",   // ┘
        (Left, Left) | (Right, Right) => "\u{2500}", // ─
        (Up, Up) | (Down, Down) => "\u{2502}",      // │
        // A reversal never reaches the board: the neck cell is occupied, so
        // the collision check ends the game first.
        (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left) => {
            unreachable!("reversal through the snake body")
        }
    }
}

/// Returns the glyph for any cell.
#[must_use]
pub fn cell_glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => GLYPH_BLANK,
        Cell::Food => GLYPH_FOOD,
        Cell::Head => GLYPH_HEAD,
        Cell::Body { incoming, outgoing } => body_glyph(incoming, outgoing),
    }
}

/// Returns the theme color for any cell.
#[must_use]
pub fn cell_color(cell: Cell, theme: &Theme) -> Color {
    match cell {
        Cell::Empty => theme.blank,
        Cell::Food => theme.food,
        Cell::Head | Cell::Body { .. } => theme.snake,
    }
}
