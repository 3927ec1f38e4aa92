use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{
    board_size::BoardSize,
    cell::{Cell, Coord},
    mark::Mark,
};

/// Identifies one of the `2n + 2` lines of a board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum LineKind {
    /// Row `y`.
    #[display("row {_0}")]
    Row(usize),
    /// Column `x`.
    #[display("column {_0}")]
    Column(usize),
    /// Cells `(i, i)`.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells `(n - 1 - i, i)`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl LineKind {
    /// Returns every line of a board of `size`, in scan order: rows, columns, diagonals.
    pub fn all(size: BoardSize) -> impl Iterator<Item = Self> {
        let n = size.side();
        (0..n)
            .map(Self::Row)
            .chain((0..n).map(Self::Column))
            .chain([Self::MainDiagonal, Self::AntiDiagonal])
    }

    /// Returns the coordinates of this line in increasing order along the line.
    pub fn coords(self, size: BoardSize) -> impl Iterator<Item = Coord> {
        let n = size.side();
        (0..n).map(move |i| match self {
            Self::Row(y) => Coord::new(i, y),
            Self::Column(x) => Coord::new(x, i),
            Self::MainDiagonal => Coord::new(i, i),
            Self::AntiDiagonal => Coord::new(n - 1 - i, i),
        })
    }
}

/// Snapshot of the cells of one row, column or diagonal.
///
/// Lines are recomputed from the board on demand and hold copies of the cells, so they
/// stay valid after the board changes (they just describe the old state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    cells: ArrayVec<Cell, { BoardSize::MAX_SIDE }>,
}

impl Line {
    pub(crate) fn new(kind: LineKind, cells: ArrayVec<Cell, { BoardSize::MAX_SIDE }>) -> Self {
        Self { kind, cells }
    }

    #[must_use]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    /// Returns the empty cells of the line, in line order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().filter(|c| c.is_empty()).map(Cell::coord)
    }

    /// Returns how many cells of the line `mark` holds.
    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    /// Returns the mark holding every cell of the line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        let first = self.cells.first()?.mark()?;
        self.cells
            .iter()
            .all(|c| c.mark() == Some(first))
            .then_some(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lines_scan_order() {
        let kinds = LineKind::all(BoardSize::THREE).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Row(2),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Column(2),
                LineKind::MainDiagonal,
                LineKind::AntiDiagonal,
            ]
        );
        for size in BoardSize::ALL {
            assert_eq!(LineKind::all(size).count(), 2 * size.side() + 2);
        }
    }

    #[test]
    fn test_coords() {
        let size = BoardSize::FOUR;
        let coords = |kind: LineKind| kind.coords(size).collect::<Vec<_>>();

        assert_eq!(
            coords(LineKind::Row(1)),
            [(0, 1), (1, 1), (2, 1), (3, 1)].map(|(x, y)| Coord::new(x, y))
        );
        assert_eq!(
            coords(LineKind::Column(3)),
            [(3, 0), (3, 1), (3, 2), (3, 3)].map(|(x, y)| Coord::new(x, y))
        );
        assert_eq!(
            coords(LineKind::MainDiagonal),
            [(0, 0), (1, 1), (2, 2), (3, 3)].map(|(x, y)| Coord::new(x, y))
        );
        assert_eq!(
            coords(LineKind::AntiDiagonal),
            [(3, 0), (2, 1), (1, 2), (0, 3)].map(|(x, y)| Coord::new(x, y))
        );
    }

    #[test]
    fn test_winner() {
        let make = |marks: [Option<Mark>; 3]| {
            let cells = LineKind::Row(0)
                .coords(BoardSize::THREE)
                .zip(marks)
                .map(|(coord, mark)| {
                    let mut cell = Cell::new(coord);
                    if let Some(mark) = mark {
                        cell.occupy(mark).unwrap();
                    }
                    cell
                })
                .collect();
            Line::new(LineKind::Row(0), cells)
        };

        let x = Some(Mark::X);
        let o = Some(Mark::O);
        assert_eq!(make([x, x, x]).winner(), Some(Mark::X));
        assert_eq!(make([o, o, o]).winner(), Some(Mark::O));
        assert_eq!(make([x, o, x]).winner(), None);
        assert_eq!(make([x, x, None]).winner(), None);
        assert_eq!(make([None, None, None]).winner(), None);

        let line = make([x, None, o]);
        assert_eq!(line.count(Mark::X), 1);
        assert_eq!(line.count(Mark::O), 1);
        assert_eq!(line.empty_cells().collect::<Vec<_>>(), [Coord::new(1, 0)]);
    }
}
