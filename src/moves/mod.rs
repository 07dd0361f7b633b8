//! Move acquisition: a `MoveSource` supplies column choices for one seat at
//! the board, so the game core never cares whether moves come from a prompt,
//! a script, or a random picker.

mod random;
mod runner;
mod scripted;
mod source;

pub use random::RandomSource;
pub use runner::MatchRunner;
pub use scripted::ScriptedSource;
pub use source::MoveSource;
