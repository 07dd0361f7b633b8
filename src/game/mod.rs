//! Core Connect Four game logic: board representation, player marks, and the
//! match state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, CONNECT, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
