use rand::Rng as _;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    Board, BoardSize, BoardState, Coord, IllegalMoveError, ResizeWhilePlayingError,
    engine::{
        match_seed::MatchSeed,
        opponent::Opponent,
        round_status::{RoundOutcome, RoundResult, RoundStatus, Side},
    },
};

/// Where the match is in its round cycle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPhase {
    /// No round has been started yet, or the board was just rebuilt.
    #[display("round starting")]
    RoundStarting,
    #[display("awaiting human move")]
    AwaitingHumanMove,
    #[display("awaiting AI move")]
    AwaitingAiMove,
    /// The last round reached a terminal state; waiting for [`MatchController::new_round`].
    #[display("round ended")]
    RoundEnded,
}

impl MatchPhase {
    /// Returns whether the board may be rebuilt in this phase.
    #[must_use]
    pub const fn is_between_rounds(self) -> bool {
        matches!(self, Self::RoundStarting | Self::RoundEnded)
    }
}

/// Who opens each round.
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
pub enum FirstMover {
    /// Fair coin flip every round.
    #[default]
    #[display("random")]
    Random,
    #[display("player")]
    Player,
    #[display("ai")]
    Ai,
}

/// Match settings that survive across rounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    pub size: BoardSize,
    pub first_mover: FirstMover,
}

/// What happened during one call into the controller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// The accepted player move.
    pub player_move: Option<Coord>,
    /// The opponent's reply, if it got to move.
    pub ai_move: Option<Coord>,
    /// Set when the round reached a terminal state.
    pub result: Option<RoundResult>,
}

/// Owns the board and the round bookkeeping and sequences the turns.
///
/// The controller is the only component mutating the [`Board`] and [`RoundStatus`]. The
/// computer player is consulted through the [`Opponent`] trait right after every
/// non-terminal human move, so each command returns with the board waiting for the human
/// again (or with the round over).
///
/// After a terminal state the match stays in [`MatchPhase::RoundEnded`] until
/// [`Self::new_round`] is called.
#[derive(Debug)]
pub struct MatchController<O> {
    board: Board,
    status: RoundStatus,
    phase: MatchPhase,
    first_mover: FirstMover,
    opponent: O,
    rng: Pcg32,
    last_result: Option<RoundResult>,
}

impl<O> MatchController<O>
where
    O: Opponent,
{
    /// Creates a controller with a random seed. No round is started yet.
    #[must_use]
    pub fn new(options: MatchOptions, opponent: O) -> Self {
        Self::with_seed(options, opponent, rand::rng().random())
    }

    /// Like [`Self::new`], but with a specific seed for the first-mover draws.
    #[must_use]
    pub fn with_seed(options: MatchOptions, opponent: O, seed: MatchSeed) -> Self {
        Self {
            board: Board::new(options.size),
            status: RoundStatus::new(),
            phase: MatchPhase::RoundStarting,
            first_mover: options.first_mover,
            opponent,
            rng: seed.rng(),
            last_result: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> &RoundStatus {
        &self.status
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn first_mover(&self) -> FirstMover {
        self.first_mover
    }

    /// Returns the result of the most recently finished round, cleared when a new round
    /// starts.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Starts a new round on an empty board.
    ///
    /// A round still in progress is abandoned without touching the counters. When the
    /// opponent opens, its first move is already on the board when this returns.
    #[instrument(level = "debug", skip(self), fields(phase = %self.phase))]
    pub fn new_round(&mut self) -> TurnReport {
        if !self.phase.is_between_rounds() {
            info!("abandoning the round in progress");
        }
        self.phase = MatchPhase::RoundStarting;
        self.board.reset();
        self.last_result = None;

        let first_mover = self.draw_first_mover();
        self.status.assign_symbols(first_mover);
        self.status.start();
        info!(
            size = %self.board.size(),
            %first_mover,
            player_mark = %self.status.player_mark(),
            "round started"
        );

        match first_mover {
            Side::Player => {
                self.phase = MatchPhase::AwaitingHumanMove;
                TurnReport::default()
            }
            Side::Ai => {
                self.phase = MatchPhase::AwaitingAiMove;
                let (ai_move, result) = self.play_ai_turn();
                TurnReport {
                    player_move: None,
                    ai_move,
                    result,
                }
            }
        }
    }

    /// Applies a human move and, if the round goes on, the opponent's reply.
    ///
    /// Moves outside [`MatchPhase::AwaitingHumanMove`], out of range or onto a held cell
    /// are rejected and leave the match untouched.
    #[instrument(level = "debug", skip(self), fields(phase = %self.phase))]
    pub fn handle_move(&mut self, coord: Coord) -> Result<TurnReport, IllegalMoveError> {
        if !self.phase.is_awaiting_human_move() {
            warn!("rejected player move: not the player's turn");
            return Err(IllegalMoveError::NotPlayersTurn { phase: self.phase });
        }
        self.board
            .apply(coord, self.status.player_mark())
            .inspect_err(|err| warn!(%err, "rejected player move"))?;
        debug!(%coord, "player moved");

        let mut report = TurnReport {
            player_move: Some(coord),
            ..TurnReport::default()
        };
        if let Some(result) = self.settle() {
            report.result = Some(result);
            return Ok(report);
        }

        self.phase = MatchPhase::AwaitingAiMove;
        (report.ai_move, report.result) = self.play_ai_turn();
        Ok(report)
    }

    /// Rebuilds the board with a new side length and starts a new round.
    ///
    /// Only allowed between rounds.
    #[instrument(level = "debug", skip(self), fields(phase = %self.phase))]
    pub fn resize(&mut self, size: BoardSize) -> Result<TurnReport, ResizeWhilePlayingError> {
        if !self.phase.is_between_rounds() {
            warn!(%size, "rejected resize during a round");
            return Err(ResizeWhilePlayingError { phase: self.phase });
        }
        self.board = Board::new(size);
        info!(%size, "board resized");
        Ok(self.new_round())
    }

    /// Zeroes the win and draw counters.
    pub fn reset_statistics(&mut self) {
        self.status.reset_counters();
        info!("statistics reset");
    }

    fn draw_first_mover(&mut self) -> Side {
        match self.first_mover {
            FirstMover::Player => Side::Player,
            FirstMover::Ai => Side::Ai,
            FirstMover::Random => {
                if self.rng.random_bool(0.5) {
                    Side::Player
                } else {
                    Side::Ai
                }
            }
        }
    }

    /// Lets the opponent move, then evaluates the board.
    fn play_ai_turn(&mut self) -> (Option<Coord>, Option<RoundResult>) {
        debug_assert!(self.phase.is_awaiting_ai_move());
        let mark = self.status.ai_mark();
        match self.opponent.play(&mut self.board, mark) {
            Ok(coord) => {
                debug!(%coord, %mark, "AI moved");
                let result = self.settle();
                if result.is_none() {
                    self.phase = MatchPhase::AwaitingHumanMove;
                }
                (Some(coord), result)
            }
            Err(err) => {
                error!(%err, "AI could not move; ending the round as a draw");
                let result = RoundResult::draw();
                self.end_round(result.clone());
                (None, Some(result))
            }
        }
    }

    /// Ends the round if the board is terminal.
    fn settle(&mut self) -> Option<RoundResult> {
        let result = match self.board.evaluate() {
            BoardState::InProgress => return None,
            BoardState::Won { mark, line } => RoundResult {
                outcome: RoundOutcome::won_by(self.status.side_of(mark)),
                line: Some(line.kind()),
                win_cells: line.coords().collect(),
            },
            BoardState::Draw => RoundResult::draw(),
        };
        self.end_round(result.clone());
        Some(result)
    }

    fn end_round(&mut self, result: RoundResult) {
        self.status.record_result(result.outcome);
        self.status.stop();
        self.phase = MatchPhase::RoundEnded;
        info!(
            outcome = %result.outcome,
            player_wins = self.status.player_wins(),
            ai_wins = self.status.ai_wins(),
            draws = self.status.draws(),
            "round ended"
        );
        self.last_result = Some(result);
    }
}
