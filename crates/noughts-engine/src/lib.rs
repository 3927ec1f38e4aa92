//! Game-state engine for n×n tic-tac-toe (n = 3, 4 or 5) against a computer opponent.
//!
//! - [`core`] holds the board model: [`Mark`], [`Cell`], [`Board`] and its [`Line`] views.
//! - [`engine`] holds the match bookkeeping ([`RoundStatus`]), the turn state machine
//!   ([`MatchController`]) and the [`Opponent`] seam the computer player plugs into.
//!
//! The engine never decides the computer's moves itself. Any type implementing
//! [`Opponent`] can be handed to the [`MatchController`]; `noughts-advisor` provides the
//! heuristic one.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// Requested board side length is not 3, 4 or 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("board size must be 3, 4 or 5, got {size}")]
pub struct InvalidBoardSizeError {
    pub size: usize,
}

/// Failure to parse a board size from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardSizeError {
    #[display("board size is not a number: {_0}")]
    NotANumber(std::num::ParseIntError),
    #[display("{_0}")]
    Invalid(InvalidBoardSizeError),
}

/// A mark could not be placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum ApplyMarkError {
    #[display("cell {coord} is outside the {size}x{size} board")]
    OutOfRange { coord: Coord, size: BoardSize },
    #[display("cell {coord} is already held by {mark}")]
    Occupied { coord: Coord, mark: Mark },
}

/// A player move was rejected. The match state is left untouched.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum IllegalMoveError {
    #[display("not waiting for a player move (phase: {phase})")]
    NotPlayersTurn { phase: MatchPhase },
    #[display("{_0}")]
    Cell(ApplyMarkError),
}

impl From<ApplyMarkError> for IllegalMoveError {
    fn from(err: ApplyMarkError) -> Self {
        Self::Cell(err)
    }
}

/// The board can only be resized between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cannot resize the board while a round is in progress (phase: {phase})")]
pub struct ResizeWhilePlayingError {
    pub phase: MatchPhase,
}

/// The computer player failed to produce a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::IsVariant,
)]
pub enum OpponentError {
    #[display("no empty cell left to play")]
    NoLegalMove,
    #[display("opponent chose an unplayable cell: {_0}")]
    InvalidChoice(ApplyMarkError),
}
