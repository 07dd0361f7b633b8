use crate::game::{GameOutcome, GameState, MoveError, Player};

use super::source::MoveSource;

/// Drives a match between two move sources to completion: solicit a column
/// from the player to move, apply it, and interpret the result. A rejected
/// drop (full or out-of-range column) does not alternate the turn; the same
/// source is simply asked again.
pub struct MatchRunner {
    state: GameState,
    seats: [Box<dyn MoveSource>; 2],
}

impl MatchRunner {
    pub fn new(red: Box<dyn MoveSource>, yellow: Box<dyn MoveSource>) -> Self {
        Self::with_state(GameState::initial(), red, yellow)
    }

    pub fn with_state(
        state: GameState,
        red: Box<dyn MoveSource>,
        yellow: Box<dyn MoveSource>,
    ) -> Self {
        MatchRunner {
            state,
            seats: [red, yellow],
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Solicit and apply one move. Returns the rejection, if any, so callers
    /// can observe the retry behavior. When the match has already ended this
    /// returns `GameOver` without soliciting a move.
    pub fn play_turn(&mut self) -> Result<(), MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let seat = self.state.current_player().index();
        let column = self.seats[seat].next_column(&self.state);
        self.state.apply_move_mut(column)
    }

    /// Play until a win or draw and return the outcome.
    pub fn run_to_completion(&mut self) -> GameOutcome {
        while !self.state.is_terminal() {
            match self.play_turn() {
                Ok(()) => {}
                // Same player retries on a rejected drop
                Err(MoveError::ColumnFull) | Err(MoveError::InvalidColumn) => {}
                Err(MoveError::GameOver) => break,
            }
        }
        self.state
            .outcome()
            .expect("loop exits only once the match is terminal")
    }

    /// Display name of the source seated for `player`
    pub fn seat_name(&self, player: Player) -> &str {
        self.seats[player.index()].name()
    }
}
