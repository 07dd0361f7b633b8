use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::GameState;

use super::source::MoveSource;

/// A move source that selects uniformly at random from legal columns.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    pub fn new() -> Self {
        RandomSource {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games
    pub fn seeded(seed: u64) -> Self {
        RandomSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomSource {
    fn next_column(&mut self, state: &GameState) -> usize {
        let actions = state.legal_actions();
        assert!(!actions.is_empty(), "No legal columns available");
        let idx = self.rng.random_range(0..actions.len());
        actions[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
