use noughts_engine::{Board, Coord, Mark, MatchSeed, Opponent};
use rand::{Rng as _, seq::IteratorRandom as _};
use rand_pcg::Pcg32;
use tracing::debug;

/// Plays a uniformly random empty cell every turn.
///
/// Used as the sparring partner of headless simulations.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: Pcg32,
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomOpponent {
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: MatchSeed) -> Self {
        Self { rng: seed.rng() }
    }
}

impl Opponent for RandomOpponent {
    fn select_cell(&mut self, board: &Board, mark: Mark) -> Option<Coord> {
        let coord = board.empty_cells().choose(&mut self.rng)?;
        debug!(%coord, %mark, "random opponent chose a cell");
        Some(coord)
    }
}
