use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Corners, then the center, then the edges.
pub const PRECEDENCE_TIERS: [&[CellIndex]; 3] = [&[0, 2, 6, 8], &[4], &[1, 3, 5, 7]];

pub trait MoveSelector {
    /// Picks one of `empty`, or `None` only when `empty` has no members.
    fn select_move(&mut self, empty: CellSet) -> Option<CellIndex>;
}

/// Plays the best available tier of [`PRECEDENCE_TIERS`], choosing uniformly at random inside it.
#[derive(Clone, Debug)]
pub struct PrecedenceHeuristic {
    rng: SmallRng,
}

impl PrecedenceHeuristic {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MoveSelector for PrecedenceHeuristic {
    fn select_move(&mut self, empty: CellSet) -> Option<CellIndex> {
        let candidates = PRECEDENCE_TIERS
            .iter()
            .map(|tier| CellSet::from_slice(tier).intersection(empty))
            .find(|candidates| !candidates.is_empty())?;

        let pick = self.rng.random_range(0..candidates.len());
        let index = candidates.nth(pick);
        log::trace!("tier candidates {:?}, picked {:?}", candidates, index);
        index
    }
}
