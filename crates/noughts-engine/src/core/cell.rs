use serde::{Deserialize, Serialize};

use super::mark::{Mark, Occupancy};

/// Board coordinate. `x` is the column, `y` is the row, both zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A single board position and what it holds.
///
/// Occupancy only ever moves from [`Occupancy::Empty`] to [`Occupancy::Held`]; the only way
/// back is a full board reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coord: Coord,
    occupancy: Occupancy,
}

impl Cell {
    #[must_use]
    pub const fn new(coord: Coord) -> Self {
        Self {
            coord,
            occupancy: Occupancy::Empty,
        }
    }

    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    #[must_use]
    pub const fn occupancy(&self) -> Occupancy {
        self.occupancy
    }

    #[must_use]
    pub const fn mark(&self) -> Option<Mark> {
        self.occupancy.mark()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.occupancy, Occupancy::Empty)
    }

    /// Places `mark` if the cell is empty. Returns the current holder otherwise.
    pub(crate) fn occupy(&mut self, mark: Mark) -> Result<(), Mark> {
        match self.occupancy {
            Occupancy::Empty => {
                self.occupancy = Occupancy::Held(mark);
                Ok(())
            }
            Occupancy::Held(holder) => Err(holder),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.occupancy = Occupancy::Empty;
    }
}
