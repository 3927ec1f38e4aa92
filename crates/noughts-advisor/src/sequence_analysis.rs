//! Per-line ownership summary used by the move advisor.
//!
//! A [`SequenceAnalysis`] splits the cells of one row, column or diagonal into the cells
//! held by the computer, the cells held by the human and the empty ones. A line that only
//! one side has marked is still winnable for that side; how many empty cells it has left is
//! that side's "moves to win" on the line.
//!
//! Analyses are snapshots: they are recomputed from the board on every decision and never
//! stored.
//!
//! ```
//! use noughts_advisor::sequence_analysis::analyze_board;
//! use noughts_engine::{Board, BoardSize, Coord, LineKind, Mark, Side};
//!
//! let mut board = Board::new(BoardSize::FOUR);
//! board.apply(Coord::new(0, 0), Mark::O).unwrap();
//! board.apply(Coord::new(1, 0), Mark::O).unwrap();
//!
//! let row0 = analyze_board(&board, Mark::O)
//!     .find(|a| a.kind() == LineKind::Row(0))
//!     .unwrap();
//! assert_eq!(row0.favors(), Some(Side::Ai));
//! assert_eq!(row0.moves_to_win(Side::Ai), Some(2));
//! assert_eq!(row0.moves_to_win(Side::Player), None);
//! ```

use arrayvec::ArrayVec;
use noughts_engine::{Board, BoardSize, Coord, Line, LineKind, Mark, Side};

type LineCoords = ArrayVec<Coord, { BoardSize::MAX_SIDE }>;

/// Ownership summary of one line from the computer's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceAnalysis {
    kind: LineKind,
    ai_cells: LineCoords,
    player_cells: LineCoords,
    empty_cells: LineCoords,
}

impl SequenceAnalysis {
    /// Analyzes `line` for the side holding `ai_mark`.
    #[must_use]
    pub fn from_line(line: &Line, ai_mark: Mark) -> Self {
        let mut ai_cells = LineCoords::new();
        let mut player_cells = LineCoords::new();
        let mut empty_cells = LineCoords::new();
        for cell in line.cells() {
            let bucket = match cell.mark() {
                None => &mut empty_cells,
                Some(mark) if mark == ai_mark => &mut ai_cells,
                Some(_) => &mut player_cells,
            };
            bucket.push(cell.coord());
        }
        Self {
            kind: line.kind(),
            ai_cells,
            player_cells,
            empty_cells,
        }
    }

    #[must_use]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    #[must_use]
    pub fn ai_cells(&self) -> &[Coord] {
        &self.ai_cells
    }

    #[must_use]
    pub fn player_cells(&self) -> &[Coord] {
        &self.player_cells
    }

    /// Empty cells in line order.
    #[must_use]
    pub fn empty_cells(&self) -> &[Coord] {
        &self.empty_cells
    }

    #[must_use]
    pub fn cells_of(&self, side: Side) -> &[Coord] {
        match side {
            Side::Player => &self.player_cells,
            Side::Ai => &self.ai_cells,
        }
    }

    /// Returns the side that has marked this line while the other has not.
    ///
    /// Untouched and contested lines favor nobody.
    #[must_use]
    pub fn favors(&self) -> Option<Side> {
        match (self.ai_cells.is_empty(), self.player_cells.is_empty()) {
            (false, true) => Some(Side::Ai),
            (true, false) => Some(Side::Player),
            _ => None,
        }
    }

    /// Returns how many more marks `side` needs to complete this line, if the line
    /// favors `side`.
    #[must_use]
    pub fn moves_to_win(&self, side: Side) -> Option<usize> {
        (self.favors() == Some(side)).then_some(self.empty_cells.len())
    }
}

/// Analyzes every line of `board` in scan order (rows, columns, diagonals).
pub fn analyze_board(board: &Board, ai_mark: Mark) -> impl Iterator<Item = SequenceAnalysis> + '_ {
    board
        .lines()
        .map(move |line| SequenceAnalysis::from_line(&line, ai_mark))
}
