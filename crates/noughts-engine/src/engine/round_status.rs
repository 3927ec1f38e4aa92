use serde::{Deserialize, Serialize};

use crate::{Coord, LineKind, Mark};

/// One of the two participants of a match.
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
pub enum Side {
    #[display("player")]
    Player,
    #[display("AI")]
    Ai,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Ai,
            Self::Ai => Self::Player,
        }
    }
}

/// How a round ended.
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
pub enum RoundOutcome {
    #[display("player wins")]
    PlayerWin,
    #[display("AI wins")]
    AiWin,
    #[display("draw")]
    Draw,
}

impl RoundOutcome {
    #[must_use]
    pub const fn won_by(side: Side) -> Self {
        match side {
            Side::Player => Self::PlayerWin,
            Side::Ai => Self::AiWin,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::PlayerWin => Some(Side::Player),
            Self::AiWin => Some(Side::Ai),
            Self::Draw => None,
        }
    }
}

/// Terminal result of a round, as reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub outcome: RoundOutcome,
    /// The completed line, `None` for a draw.
    pub line: Option<LineKind>,
    /// Cells of the completed line in line order, empty for a draw.
    pub win_cells: Vec<Coord>,
}

impl RoundResult {
    #[must_use]
    pub fn draw() -> Self {
        Self {
            outcome: RoundOutcome::Draw,
            line: None,
            win_cells: vec![],
        }
    }
}

/// Per-match bookkeeping: who holds which mark, whether a round is running, and the
/// cumulative results.
///
/// Counters only grow, except through [`RoundStatus::reset_counters`].
///
/// # Example
///
/// ```
/// use noughts_engine::{Mark, RoundOutcome, RoundStatus, Side};
///
/// let mut status = RoundStatus::new();
/// status.assign_symbols(Side::Ai);
/// assert_eq!(status.ai_mark(), Mark::X);
/// assert_eq!(status.player_mark(), Mark::O);
///
/// status.record_result(RoundOutcome::AiWin);
/// status.record_result(RoundOutcome::Draw);
/// assert_eq!(status.ai_wins(), 1);
/// assert_eq!(status.draws(), 1);
/// assert_eq!(status.rounds_played(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundStatus {
    player_mark: Mark,
    ai_mark: Mark,
    is_running: bool,
    player_wins: usize,
    ai_wins: usize,
    draws: usize,
}

impl Default for RoundStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundStatus {
    /// Creates an idle status with the player holding `X` and all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            player_mark: Mark::X,
            ai_mark: Mark::O,
            is_running: false,
            player_wins: 0,
            ai_wins: 0,
            draws: 0,
        }
    }

    #[must_use]
    pub const fn player_mark(&self) -> Mark {
        self.player_mark
    }

    #[must_use]
    pub const fn ai_mark(&self) -> Mark {
        self.ai_mark
    }

    #[must_use]
    pub const fn mark_of(&self, side: Side) -> Mark {
        match side {
            Side::Player => self.player_mark,
            Side::Ai => self.ai_mark,
        }
    }

    #[must_use]
    pub fn side_of(&self, mark: Mark) -> Side {
        if mark == self.player_mark {
            Side::Player
        } else {
            Side::Ai
        }
    }

    /// Gives `X` to the side moving first and `O` to the other.
    pub const fn assign_symbols(&mut self, first_mover: Side) {
        self.player_mark = match first_mover {
            Side::Player => Mark::X,
            Side::Ai => Mark::O,
        };
        self.ai_mark = self.player_mark.opponent();
    }

    /// Exchanges the marks of both sides.
    pub const fn swap_symbols(&mut self) {
        self.player_mark = self.player_mark.opponent();
        self.ai_mark = self.ai_mark.opponent();
    }

    /// Returns the side holding `X`, which moves first.
    #[must_use]
    pub fn first_mover(&self) -> Side {
        self.side_of(Mark::X)
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    pub const fn start(&mut self) {
        self.is_running = true;
    }

    pub const fn stop(&mut self) {
        self.is_running = false;
    }

    #[must_use]
    pub const fn player_wins(&self) -> usize {
        self.player_wins
    }

    #[must_use]
    pub const fn ai_wins(&self) -> usize {
        self.ai_wins
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }

    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.player_wins + self.ai_wins + self.draws
    }

    pub const fn record_result(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWin => self.player_wins += 1,
            RoundOutcome::AiWin => self.ai_wins += 1,
            RoundOutcome::Draw => self.draws += 1,
        }
    }

    pub const fn reset_counters(&mut self) {
        self.player_wins = 0;
        self.ai_wins = 0;
        self.draws = 0;
    }
}
