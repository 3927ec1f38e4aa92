//! Computer players for the noughts engine.
//!
//! The crate provides two [`Opponent`](noughts_engine::Opponent) implementations:
//!
//! - [`MoveAdvisor`] - One-ply heuristic: take a win, block the human's most urgent line,
//!   or advance the computer's own. See [`move_advisor`] for the full policy.
//! - [`RandomOpponent`] - Uniformly random empty cell. Mostly useful as a baseline.
//!
//! # Architecture
//!
//! ```text
//! MoveAdvisor (choose a cell)
//!     ↓ uses
//! SequenceAnalysis (who holds what in each line)
//!     ↓ reads
//! Board lines (rows, columns, diagonals)
//! ```
//!
//! Neither player mutates anything but the single cell it picks, and only through
//! [`Board::apply`](noughts_engine::Board::apply) when driven by a
//! [`MatchController`](noughts_engine::MatchController).
//!
//! # Example
//!
//! ```
//! use noughts_advisor::{CellChoice, MoveAdvisor};
//! use noughts_engine::{BoardSize, Coord, FirstMover, MatchController, MatchOptions};
//!
//! let options = MatchOptions {
//!     size: BoardSize::FOUR,
//!     first_mover: FirstMover::Player,
//! };
//! let mut game = MatchController::new(options, MoveAdvisor::new(CellChoice::Middle));
//! game.new_round();
//!
//! let report = game.handle_move(Coord::new(0, 0)).unwrap();
//! assert!(report.ai_move.is_some());
//! ```

pub use self::{move_advisor::*, random_opponent::*};

pub mod move_advisor;
mod random_opponent;
pub mod sequence_analysis;
