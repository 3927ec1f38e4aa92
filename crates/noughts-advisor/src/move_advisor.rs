//! One-ply heuristic for choosing the computer's move.
//!
//! # Decision Policy
//!
//! Every line of the board is summarized by a [`SequenceAnalysis`]. A line marked by only
//! one side gives that side a move count (its empty cells). The advisor then picks, in
//! order:
//!
//! 1. **Win** - a line the computer completes with one more mark.
//! 2. **Block** - the human's most urgent line, when the human needs strictly fewer moves
//!    than the computer.
//! 3. **Advance** - the computer's most urgent line otherwise.
//! 4. **Random** - any empty cell, when no line favors either side.
//!
//! Lines tying for most urgent resolve to the first one in scan order (rows, columns,
//! diagonals). Inside the chosen line the cell is picked according to [`CellChoice`].
//!
//! There is no look-ahead: the advisor never sees forks, and a human who builds two
//! threats at once wins.

use noughts_engine::{Board, Coord, LineKind, Mark, MatchSeed, Opponent, Side};
use rand::{
    Rng as _,
    seq::{IndexedRandom as _, IteratorRandom as _},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sequence_analysis::{SequenceAnalysis, analyze_board};

/// How the advisor picks a cell inside the line it decided to play.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "kebab-case")]
pub enum CellChoice {
    /// The middle empty cell of the line (`empties[len / 2]`).
    #[default]
    #[display("middle")]
    Middle,
    /// A uniformly random empty cell of the line.
    #[display("random")]
    Random,
}

/// Why the advisor chose a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveReason {
    #[display("win")]
    Win,
    #[display("block")]
    Block,
    #[display("advance")]
    Advance,
    #[display("random")]
    Random,
}

/// A chosen cell and the reasoning behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDecision {
    pub coord: Coord,
    pub reason: MoveReason,
    /// The line the decision was based on; `None` for a random move.
    pub line: Option<LineKind>,
}

/// The heuristic computer player.
///
/// # Example
///
/// ```
/// use noughts_advisor::{CellChoice, MoveAdvisor, MoveReason};
/// use noughts_engine::{Board, BoardSize, Coord, MatchSeed, Mark};
///
/// let mut board = Board::new(BoardSize::THREE);
/// board.apply(Coord::new(0, 2), Mark::X).unwrap();
/// board.apply(Coord::new(1, 2), Mark::X).unwrap();
///
/// let mut advisor = MoveAdvisor::with_seed(CellChoice::Middle, MatchSeed::from_bytes([0; 16]));
/// let decision = advisor.decide(&board, Mark::O).unwrap();
/// assert_eq!(decision.coord, Coord::new(2, 2));
/// assert_eq!(decision.reason, MoveReason::Block);
/// ```
#[derive(Debug, Clone)]
pub struct MoveAdvisor {
    cell_choice: CellChoice,
    rng: Pcg32,
}

impl Default for MoveAdvisor {
    fn default() -> Self {
        Self::new(CellChoice::default())
    }
}

impl MoveAdvisor {
    #[must_use]
    pub fn new(cell_choice: CellChoice) -> Self {
        Self::with_seed(cell_choice, rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(cell_choice: CellChoice, seed: MatchSeed) -> Self {
        Self {
            cell_choice,
            rng: seed.rng(),
        }
    }

    #[must_use]
    pub fn cell_choice(&self) -> CellChoice {
        self.cell_choice
    }

    /// Chooses an empty cell for `mark`, or `None` if the board is full.
    pub fn decide(&mut self, board: &Board, mark: Mark) -> Option<MoveDecision> {
        let mut best_ai: Option<(usize, SequenceAnalysis)> = None;
        let mut best_player: Option<(usize, SequenceAnalysis)> = None;

        for analysis in analyze_board(board, mark) {
            let Some(side) = analysis.favors() else {
                continue;
            };
            let moves = analysis.empty_cells().len();
            if moves == 0 {
                continue;
            }
            let best = match side {
                Side::Ai => &mut best_ai,
                Side::Player => &mut best_player,
            };
            if best.as_ref().is_none_or(|(best_moves, _)| moves < *best_moves) {
                *best = Some((moves, analysis));
            }
        }

        let (reason, line) = match (best_ai, best_player) {
            (Some((1, line)), _) => (MoveReason::Win, line),
            (Some((ai_moves, ai_line)), Some((player_moves, player_line))) => {
                if player_moves < ai_moves {
                    (MoveReason::Block, player_line)
                } else {
                    (MoveReason::Advance, ai_line)
                }
            }
            (Some((_, line)), None) => (MoveReason::Advance, line),
            (None, Some((_, line))) => (MoveReason::Block, line),
            (None, None) => {
                let coord = board.empty_cells().choose(&mut self.rng)?;
                return Some(MoveDecision {
                    coord,
                    reason: MoveReason::Random,
                    line: None,
                });
            }
        };

        let coord = self.pick_cell(line.empty_cells())?;
        Some(MoveDecision {
            coord,
            reason,
            line: Some(line.kind()),
        })
    }

    fn pick_cell(&mut self, empties: &[Coord]) -> Option<Coord> {
        match self.cell_choice {
            CellChoice::Middle => empties.get(empties.len() / 2).copied(),
            CellChoice::Random => empties.choose(&mut self.rng).copied(),
        }
    }
}

impl Opponent for MoveAdvisor {
    fn select_cell(&mut self, board: &Board, mark: Mark) -> Option<Coord> {
        let decision = self.decide(board, mark)?;
        debug!(
            coord = %decision.coord,
            reason = %decision.reason,
            line = ?decision.line,
            "advisor chose a cell"
        );
        Some(decision.coord)
    }
}
