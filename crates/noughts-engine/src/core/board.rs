use std::fmt;

use super::{
    board_size::BoardSize,
    cell::{Cell, Coord},
    line::{Line, LineKind},
    mark::Mark,
};
use crate::ApplyMarkError;

/// Result of scanning the board for a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum BoardState {
    /// No completed line and at least one empty cell.
    InProgress,
    /// `line` is fully held by `mark`.
    Won { mark: Mark, line: Line },
    /// Every cell is held and no line is complete.
    Draw,
}

/// Square grid of cells with side length 3, 4 or 5.
///
/// Cells are stored row-major (`y * n + x`). Rows, columns and diagonals are never stored;
/// they are derived from the cells every time they are requested.
///
/// # Example
///
/// ```
/// use noughts_engine::{Board, BoardSize, BoardState, Coord, Mark};
///
/// let mut board = Board::new(BoardSize::THREE);
/// for x in 0..3 {
///     board.apply(Coord::new(x, 1), Mark::O).unwrap();
/// }
///
/// match board.evaluate() {
///     BoardState::Won { mark, line } => {
///         assert_eq!(mark, Mark::O);
///         assert_eq!(line.coords().count(), 3);
///     }
///     state => panic!("unexpected state: {state:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        let n = size.side();
        let cells = (0..n)
            .flat_map(|y| (0..n).map(move |x| Cell::new(Coord::new(x, y))))
            .collect();
        Self { size, cells }
    }

    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        let n = self.size.side();
        coord.x < n && coord.y < n
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y * self.size.side() + coord.x)
    }

    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    /// Places `mark` on the empty cell at `coord`.
    ///
    /// A held cell is never overwritten; the board is unchanged when an error is returned.
    pub fn apply(&mut self, coord: Coord, mark: Mark) -> Result<(), ApplyMarkError> {
        let size = self.size;
        let index = self
            .index(coord)
            .ok_or(ApplyMarkError::OutOfRange { coord, size })?;
        self.cells[index]
            .occupy(mark)
            .map_err(|holder| ApplyMarkError::Occupied {
                coord,
                mark: holder,
            })
    }

    /// Empties every cell.
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::clear);
    }

    /// Returns a snapshot of the given line, or `None` if a row or column index is off
    /// the board.
    #[must_use]
    pub fn line(&self, kind: LineKind) -> Option<Line> {
        let cells = kind
            .coords(self.size)
            .map(|coord| self.cell(coord).copied())
            .collect::<Option<_>>()?;
        Some(Line::new(kind, cells))
    }

    pub fn rows(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.size.side()).filter_map(|y| self.line(LineKind::Row(y)))
    }

    pub fn columns(&self) -> impl Iterator<Item = Line> + '_ {
        (0..self.size.side()).filter_map(|x| self.line(LineKind::Column(x)))
    }

    pub fn diagonals(&self) -> impl Iterator<Item = Line> + '_ {
        [LineKind::MainDiagonal, LineKind::AntiDiagonal]
            .into_iter()
            .filter_map(|kind| self.line(kind))
    }

    /// Returns every line in scan order: rows, then columns, then diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        LineKind::all(self.size).filter_map(|kind| self.line(kind))
    }

    /// Returns the mark completing `line`, if any.
    #[must_use]
    pub fn evaluate_line(line: &Line) -> Option<Mark> {
        line.winner()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().filter(|c| c.is_empty()).map(Cell::coord)
    }

    #[must_use]
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Scans for a terminal state.
    ///
    /// Lines are checked rows first, then columns, then diagonals; the first complete line
    /// is the one reported when several complete at once.
    #[must_use]
    pub fn evaluate(&self) -> BoardState {
        for line in self.lines() {
            if let Some(mark) = Self::evaluate_line(&line) {
                return BoardState::Won { mark, line };
            }
        }
        if self.is_full() {
            BoardState::Draw
        } else {
            BoardState::InProgress
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size.side()) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                match cell.mark() {
                    Some(mark) => write!(f, "{mark}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng as _, SeedableRng as _, seq::SliceRandom as _};
    use rand_pcg::Pcg32;

    use super::*;

    fn board_from_rows(rows: &[&str]) -> Board {
        let size = BoardSize::try_from(rows.len()).unwrap();
        let mut board = Board::new(size);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                board.apply(Coord::new(x, y), mark).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        for size in BoardSize::ALL {
            let board = Board::new(size);
            assert_eq!(board.cells().len(), size.cell_count());
            assert_eq!(board.empty_cells().count(), size.cell_count());
            assert!(board.evaluate().is_in_progress());
        }
    }

    #[test]
    fn test_exactly_one_cell_per_coord() {
        let board = Board::new(BoardSize::FIVE);
        for y in 0..5 {
            for x in 0..5 {
                assert_eq!(board.cell(Coord::new(x, y)).unwrap().coord(), Coord::new(x, y));
            }
        }
        assert!(board.cell(Coord::new(5, 0)).is_none());
        assert!(board.cell(Coord::new(0, 5)).is_none());
    }

    #[test]
    fn test_apply_out_of_range() {
        let mut board = Board::new(BoardSize::THREE);
        let coord = Coord::new(3, 1);
        assert_eq!(
            board.apply(coord, Mark::X),
            Err(ApplyMarkError::OutOfRange {
                coord,
                size: BoardSize::THREE
            })
        );
        assert_eq!(board, Board::new(BoardSize::THREE));
    }

    #[test]
    fn test_apply_on_occupied_cell_keeps_mark() {
        let mut board = Board::new(BoardSize::THREE);
        let coord = Coord::new(1, 1);
        board.apply(coord, Mark::X).unwrap();
        let before = board.clone();

        for mark in Mark::ALL {
            assert_eq!(
                board.apply(coord, mark),
                Err(ApplyMarkError::Occupied {
                    coord,
                    mark: Mark::X
                })
            );
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        for size in BoardSize::ALL {
            let mut board = Board::new(size);
            board.apply(Coord::new(0, 0), Mark::X).unwrap();
            board.apply(Coord::new(2, 1), Mark::O).unwrap();
            board.reset();
            board.reset();
            assert_eq!(board, Board::new(size));
        }
    }

    #[test]
    fn test_rows_columns_diagonals() {
        let board = board_from_rows(&["XO.", ".X.", "O.X"]);
        assert_eq!(board.rows().count(), 3);
        assert_eq!(board.columns().count(), 3);
        assert_eq!(board.diagonals().count(), 2);
        assert_eq!(board.lines().count(), 8);

        let column0 = board.columns().next().unwrap();
        assert_eq!(column0.kind(), LineKind::Column(0));
        assert_eq!(column0.count(Mark::X), 1);
        assert_eq!(column0.count(Mark::O), 1);

        let main = board.line(LineKind::MainDiagonal).unwrap();
        assert_eq!(Board::evaluate_line(&main), Some(Mark::X));
        let anti = board.line(LineKind::AntiDiagonal).unwrap();
        assert_eq!(Board::evaluate_line(&anti), None);
    }

    #[test]
    fn test_line_off_the_board() {
        for size in BoardSize::ALL {
            let board = Board::new(size);
            let n = size.side();
            assert!(board.line(LineKind::Row(n - 1)).is_some());
            assert!(board.line(LineKind::Column(n - 1)).is_some());
            assert_eq!(board.line(LineKind::Row(n)), None);
            assert_eq!(board.line(LineKind::Column(n)), None);
            assert_eq!(board.line(LineKind::Row(7)), None);
        }
    }

    #[test]
    fn test_evaluate_row_win() {
        let board = board_from_rows(&["...", "OOO", "XX."]);
        let BoardState::Won { mark, line } = board.evaluate() else {
            panic!("expected a win");
        };
        assert_eq!(mark, Mark::O);
        assert_eq!(line.kind(), LineKind::Row(1));
    }

    #[test]
    fn test_evaluate_column_win() {
        let board = board_from_rows(&["XO..", "XO..", "X.O.", "X..."]);
        let BoardState::Won { mark, line } = board.evaluate() else {
            panic!("expected a win");
        };
        assert_eq!(mark, Mark::X);
        assert_eq!(
            line.coords().collect::<Vec<_>>(),
            (0..4).map(|y| Coord::new(0, y)).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_evaluate_anti_diagonal_win() {
        let board = board_from_rows(&["XXXXO", "XX.O.", "..O..", ".O...", "O...."]);
        let BoardState::Won { mark, line } = board.evaluate() else {
            panic!("expected a win");
        };
        assert_eq!(mark, Mark::O);
        assert_eq!(line.kind(), LineKind::AntiDiagonal);
    }

    #[test]
    fn test_evaluate_reports_first_line_in_scan_order() {
        // Row 0 and column 0 complete at once; the row is reported.
        let board = board_from_rows(&["XXX", "XOO", "XOO"]);
        let BoardState::Won { line, .. } = board.evaluate() else {
            panic!("expected a win");
        };
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_evaluate_draw() {
        let board = board_from_rows(&["XOX", "XOO", "OXX"]);
        assert!(board.is_full());
        assert_eq!(board.evaluate(), BoardState::Draw);
    }

    #[test]
    fn test_no_winner_before_n_marks() {
        let mut rng = Pcg32::seed_from_u64(0x5eed);
        for size in BoardSize::ALL {
            for _ in 0..200 {
                let mut board = Board::new(size);
                let mut coords = board.empty_cells().collect::<Vec<_>>();
                coords.shuffle(&mut rng);
                let mut mark = if rng.random() { Mark::X } else { Mark::O };

                for coord in coords {
                    board.apply(coord, mark).unwrap();
                    if let BoardState::Won { mark: winner, .. } = board.evaluate() {
                        assert!(board.count(winner) >= size.side());
                        break;
                    }
                    mark = mark.opponent();
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let board = board_from_rows(&["X..", ".O.", "..X"]);
        assert_eq!(board.to_string(), "X . .\n. O .\n. . X\n");
    }
}
