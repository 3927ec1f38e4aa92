use std::fmt;

use crate::{Board, Coord, Mark, OpponentError};

/// A computer player.
///
/// Implementations only read the board; the cell they choose is written through
/// [`Board::apply`], the same contract human moves go through.
pub trait Opponent: fmt::Debug {
    /// Chooses an empty cell for `mark` to occupy, or `None` when the board has no empty
    /// cell left.
    fn select_cell(&mut self, board: &Board, mark: Mark) -> Option<Coord>;

    /// Chooses a cell and places `mark` on it.
    fn play(&mut self, board: &mut Board, mark: Mark) -> Result<Coord, OpponentError> {
        let coord = self
            .select_cell(board, mark)
            .ok_or(OpponentError::NoLegalMove)?;
        board
            .apply(coord, mark)
            .map_err(OpponentError::InvalidChoice)?;
        Ok(coord)
    }
}

impl<O> Opponent for Box<O>
where
    O: Opponent + ?Sized,
{
    fn select_cell(&mut self, board: &Board, mark: Mark) -> Option<Coord> {
        (**self).select_cell(board, mark)
    }
}
