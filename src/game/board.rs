pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Run length required to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Row-major snapshot of the full grid, for rendering.
    pub fn cells(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full.
    /// Only the top row needs inspecting: the drop scan keeps every column's
    /// occupied cells contiguous from the bottom, so a column is full exactly
    /// when its top cell is.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Check whether `cell` has a run of four anywhere on the board.
    /// Pure query; returns on the first run found, in no particular order.
    pub fn check_winner(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        self.horizontal_run(cell)
            || self.vertical_run(cell)
            || self.ascending_run(cell)
            || self.descending_run(cell)
    }

    /// Horizontal run: row fixed, column increasing.
    fn horizontal_run(&self, cell: Cell) -> bool {
        for row in 0..ROWS {
            for col in 0..=COLS - CONNECT {
                if (0..CONNECT).all(|k| self.cells[row][col + k] == cell) {
                    return true;
                }
            }
        }
        false
    }

    /// Vertical run: column fixed, row increasing.
    fn vertical_run(&self, cell: Cell) -> bool {
        for col in 0..COLS {
            for row in 0..=ROWS - CONNECT {
                if (0..CONNECT).all(|k| self.cells[row + k][col] == cell) {
                    return true;
                }
            }
        }
        false
    }

    /// Ascending diagonal (/): row decreasing, column increasing.
    /// Windows anchor at rows CONNECT-1..ROWS so every step stays in bounds.
    fn ascending_run(&self, cell: Cell) -> bool {
        for col in 0..=COLS - CONNECT {
            for row in CONNECT - 1..ROWS {
                if (0..CONNECT).all(|k| self.cells[row - k][col + k] == cell) {
                    return true;
                }
            }
        }
        false
    }

    /// Descending diagonal (\): row increasing, column increasing.
    fn descending_run(&self, cell: Cell) -> bool {
        for col in 0..=COLS - CONNECT {
            for row in 0..=ROWS - CONNECT {
                if (0..CONNECT).all(|k| self.cells[row + k][col + k] == cell) {
                    return true;
                }
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.drop_piece(0, Cell::Yellow), Err(MoveError::ColumnFull));
        assert_eq!(board, before); // Rejected drop mutates nothing
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.drop_piece(7, Cell::Red), Err(MoveError::InvalidColumn));
        assert_eq!(
            board.drop_piece(usize::MAX, Cell::Red),
            Err(MoveError::InvalidColumn)
        );
        assert_eq!(board, Board::new());

        // Same rejection on a partially filled board
        board.drop_piece(2, Cell::Red).unwrap();
        let before = board;
        assert_eq!(board.drop_piece(7, Cell::Yellow), Err(MoveError::InvalidColumn));
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_not_full_with_one_open_cell() {
        let mut board = Board::new();
        for col in 0..COLS - 1 {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        // Last column one short of full
        for _ in 0..ROWS - 1 {
            board.drop_piece(COLS - 1, Cell::Red).unwrap();
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        let board = Board::new();
        assert!(!board.check_winner(Cell::Red));
        assert!(!board.check_winner(Cell::Yellow));
        assert!(!board.check_winner(Cell::Empty));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Bottom-row line across columns 0..4
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.check_winner(Cell::Red));
        assert!(!board.check_winner(Cell::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(!board.check_winner(Cell::Yellow)); // Three is not enough
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(board.check_winner(Cell::Yellow));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Staircase / pattern: Red at (5,0), (4,1), (3,2), (2,3)
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(!board.check_winner(Cell::Red));
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.check_winner(Cell::Red));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Staircase \ pattern: Red at (5,6), (4,5), (3,4), (2,3)
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert!(!board.check_winner(Cell::Red));
        board.drop_piece(3, Cell::Red).unwrap();

        assert!(board.check_winner(Cell::Red));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.check_winner(Cell::Red));
    }

    #[test]
    fn test_full_board_draw_pattern() {
        // Column fill XXYYXX (bottom to top), X alternating with column
        // parity. Rows alternate marks, columns cap runs at two, and a
        // diagonal step flips color except at the two band boundaries, so no
        // run of four exists anywhere.
        let mut board = Board::new();
        for col in 0..COLS {
            let x = if col % 2 == 0 { Cell::Red } else { Cell::Yellow };
            let y = if col % 2 == 0 { Cell::Yellow } else { Cell::Red };
            for mark in [x, x, y, y, x, x] {
                board.drop_piece(col, mark).unwrap();
            }
        }

        assert!(board.is_full());
        assert!(!board.check_winner(Cell::Red));
        assert!(!board.check_winner(Cell::Yellow));
    }

    #[test]
    fn test_cells_snapshot_matches_get() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(0, Cell::Yellow).unwrap();

        let snapshot = board.cells();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(snapshot[row][col], board.get(row, col));
            }
        }
        assert_eq!(snapshot[5][0], Cell::Red);
        assert_eq!(snapshot[4][0], Cell::Yellow);
    }

    proptest! {
        /// Gravity invariant: after any drop sequence, each column's occupied
        /// cells are contiguous from the bottom row upward.
        #[test]
        fn prop_gravity_invariant(columns in proptest::collection::vec(0usize..COLS, 0..200)) {
            let mut board = Board::new();
            for (i, &col) in columns.iter().enumerate() {
                let mark = if i % 2 == 0 { Cell::Red } else { Cell::Yellow };
                let _ = board.drop_piece(col, mark); // Drops into full columns are rejected
            }

            for col in 0..COLS {
                let mut seen_occupied = false;
                for row in 0..ROWS {
                    match board.get(row, col) {
                        Cell::Empty => prop_assert!(
                            !seen_occupied,
                            "empty cell below an occupied one at ({}, {})",
                            row, col
                        ),
                        _ => seen_occupied = true,
                    }
                }
            }
        }

        /// An out-of-range drop never changes the grid.
        #[test]
        fn prop_rejected_drop_is_noop(
            columns in proptest::collection::vec(0usize..COLS, 0..42),
            bad_col in COLS..COLS + 100,
        ) {
            let mut board = Board::new();
            for &col in &columns {
                let _ = board.drop_piece(col, Cell::Red);
            }

            let before = board;
            prop_assert_eq!(board.drop_piece(bad_col, Cell::Yellow), Err(MoveError::InvalidColumn));
            prop_assert_eq!(board, before);
        }
    }
}
