use crate::game::GameState;

/// Universal interface for anything that can choose the next move.
pub trait MoveSource {
    /// Choose a column given the current game state. The call may block
    /// (a prompt, a peer); the board itself never does. The returned column
    /// is not guaranteed legal — the controller re-solicits on rejection.
    fn next_column(&mut self, state: &GameState) -> usize;

    /// Return the source's display name.
    fn name(&self) -> &str;
}
