use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::initial_with(Player::Red)
    }

    /// Create initial game state with a designated first player
    pub fn initial_with(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..super::board::COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mark = self.current_player.to_cell();
        self.board.drop_piece(column, mark).map_err(|e| match e {
            super::board::MoveError::ColumnFull => MoveError::ColumnFull,
            super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        })?;

        // A win can only appear for the mark that just dropped
        if self.board.check_winner(mark) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(())
    }
}
