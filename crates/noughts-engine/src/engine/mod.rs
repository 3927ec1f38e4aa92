//! Match orchestration on top of the board model.
//!
//! - [`MatchController`] - Turn state machine: human move → evaluation → computer reply
//! - [`RoundStatus`] - Symbol assignment, running flag and win/draw counters
//! - [`Opponent`] - Seam for the computer player
//! - [`MatchSeed`] - Seed for reproducible first-mover draws and opponent choices
//!
//! # Round Flow
//!
//! ```text
//! RoundStarting ─┬─> AwaitingHumanMove ⇄ AwaitingAiMove ─┐
//!                └─> AwaitingAiMove ──────────────────────┴─> RoundEnded
//! ```
//!
//! Every command runs to completion before returning: a human move is applied, the board
//! is evaluated, and, when the round goes on, the opponent replies within the same call.
//!
//! # Example
//!
//! ```
//! use noughts_engine::{
//!     Board, BoardSize, Coord, FirstMover, Mark, MatchController, MatchOptions, Opponent,
//! };
//!
//! /// Plays the first empty cell.
//! #[derive(Debug)]
//! struct FirstEmpty;
//!
//! impl Opponent for FirstEmpty {
//!     fn select_cell(&mut self, board: &Board, _mark: Mark) -> Option<Coord> {
//!         board.empty_cells().next()
//!     }
//! }
//!
//! let options = MatchOptions {
//!     size: BoardSize::THREE,
//!     first_mover: FirstMover::Player,
//! };
//! let mut game = MatchController::new(options, FirstEmpty);
//! game.new_round();
//!
//! let report = game.handle_move(Coord::new(1, 1)).unwrap();
//! assert_eq!(report.ai_move, Some(Coord::new(0, 0)));
//! assert!(report.result.is_none());
//! ```

pub use self::{match_controller::*, match_seed::*, opponent::*, round_status::*};

mod match_controller;
mod match_seed;
mod opponent;
mod round_status;
