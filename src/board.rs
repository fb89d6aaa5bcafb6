use crate::config::GridSize;
use crate::input::Direction;
use crate::snake::Position;

/// Semantic value of one grid cell.
///
/// Body cells remember the direction pair that carried the snake through
/// them; the pair exists only so the renderer can pick the matching corner
/// or straight glyph.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cell {
    Empty,
    Food,
    Head,
    Body {
        incoming: Direction,
        outgoing: Direction,
    },
}

/// Owned grid of cells, row-major.
#[derive(Debug, Clone)]
pub struct Board {
    grid: GridSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    #[must_use]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            cells: vec![Cell::Empty; grid.total_cells()],
        }
    }

    /// Returns the board dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// Returns the cell at `position`.
    ///
    /// Callers pass in-bounds positions only; the game rejects out-of-bounds
    /// candidates before they reach the board.
    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[self.index(position)]
    }

    /// Overwrites the cell at `position`.
    pub fn set(&mut self, position: Position, cell: Cell) {
        let index = self.index(position);
        self.cells[index] = cell;
    }

    /// Collects every currently empty position, row by row.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions()
            .filter(|position| self.cell(*position) == Cell::Empty)
            .collect()
    }

    /// Iterates all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let (rows, cols) = (i32::from(self.grid.rows), i32::from(self.grid.cols));
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Position { row, col }))
    }

    fn index(&self, position: Position) -> usize {
        debug_assert!(position.is_within_bounds(self.grid));
        position.row as usize * usize::from(self.grid.cols) + position.col as usize
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::Position;

    use super::{Board, Cell};

    #[test]
    fn new_board_is_entirely_empty() {
        let board = Board::new(GridSize { rows: 4, cols: 8 });

        assert_eq!(board.empty_positions().len(), 32);
        assert_eq!(board.cell(Position { row: 3, col: 7 }), Cell::Empty);
    }

    #[test]
    fn set_and_read_back_a_cell() {
        let mut board = Board::new(GridSize { rows: 2, cols: 3 });
        let turn = Cell::Body {
            incoming: Direction::Up,
            outgoing: Direction::Right,
        };

        board.set(Position { row: 1, col: 2 }, turn);

        assert_eq!(board.cell(Position { row: 1, col: 2 }), turn);
        assert_eq!(board.empty_positions().len(), 5);
    }

    #[test]
    fn empty_positions_skip_occupied_cells() {
        let mut board = Board::new(GridSize { rows: 2, cols: 2 });
        board.set(Position { row: 0, col: 0 }, Cell::Head);
        board.set(Position { row: 1, col: 1 }, Cell::Food);

        let empty = board.empty_positions();

        assert_eq!(
            empty,
            vec![Position { row: 0, col: 1 }, Position { row: 1, col: 0 }]
        );
    }
}
