use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
///
/// Rows grow downwards and columns grow to the right, matching the rendered
/// text grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

/// Default number of grid rows.
pub const DEFAULT_GRID_ROWS: u16 = 4;

/// Default number of grid columns.
pub const DEFAULT_GRID_COLS: u16 = 8;

/// Default initial snake length.
pub const DEFAULT_SNAKE_LEN: u16 = 3;

/// Rejected game configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be positive (got {rows} rows x {cols} columns)")]
    EmptyGrid { rows: u16, cols: u16 },
    #[error("initial snake length must be at least 1")]
    SnakeTooShort,
    #[error("initial snake length {snake_len} must be shorter than the {cols} grid columns")]
    SnakeTooLong { snake_len: u16, cols: u16 },
}

/// Validated game configuration.
///
/// Constructing one is the only way to start a game, so every `GameState`
/// begins from dimensions the initial snake actually fits in.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub snake_len: u16,
}

impl GameConfig {
    /// Validates raw dimensions into a playable configuration.
    pub fn new(rows: u16, cols: u16, snake_len: u16) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyGrid { rows, cols });
        }
        if snake_len == 0 {
            return Err(ConfigError::SnakeTooShort);
        }
        // The snake starts horizontal, so it must fit across one row.
        if snake_len >= cols {
            return Err(ConfigError::SnakeTooLong { snake_len, cols });
        }

        Ok(Self {
            grid: GridSize { rows, cols },
            snake_len,
        })
    }
}
