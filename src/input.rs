use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// One player decision per turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Maps a key event to a command.
///
/// `i`/`j`/`k`/`l` steer (vi-style home row, as do the arrow keys), `q` and
/// `Esc` quit, `Ctrl-C` always quits. Every other key returns `None` so the
/// caller can re-render and wait for the next keystroke without consuming a
/// turn.
#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('i') | KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Char('j') | KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Char('k') | KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Char('l') | KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Blocks for one terminal event and maps it to a command.
///
/// Returns `Ok(None)` for events with no binding (unknown keys, resizes), so
/// the play loop redraws and blocks again.
pub fn next_command() -> io::Result<Option<Command>> {
    match event::read()? {
        Event::Key(key) => Ok(command_for_key(key)),
        _ => Ok(None),
    }
}
