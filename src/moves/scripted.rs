use std::collections::VecDeque;

use crate::game::GameState;

use super::source::MoveSource;

/// A move source that replays a fixed column sequence. Intended for tests and
/// scripted demos; asking for a move past the end of the script is a bug in
/// the script.
pub struct ScriptedSource {
    name: String,
    columns: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = usize>) -> Self {
        ScriptedSource {
            name: name.into(),
            columns: columns.into_iter().collect(),
        }
    }

    /// Number of scripted moves left
    pub fn remaining(&self) -> usize {
        self.columns.len()
    }
}

impl MoveSource for ScriptedSource {
    fn next_column(&mut self, _state: &GameState) -> usize {
        self.columns
            .pop_front()
            .expect("scripted source ran out of moves")
    }

    fn name(&self) -> &str {
        &self.name
    }
}
