use serde::{Deserialize, Serialize};

/// One of the two symbols a side occupies cells with.
///
/// `X` always moves first in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    #[display("X")]
    X,
    #[display("O")]
    O,
}

impl Mark {
    pub const ALL: [Self; 2] = [Self::X, Self::O];

    /// Returns the other mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

/// What a cell currently holds.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
pub enum Occupancy {
    #[default]
    Empty,
    Held(Mark),
}

impl Occupancy {
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::Held(mark) => Some(mark),
        }
    }

    #[must_use]
    pub fn is_held_by(self, mark: Mark) -> bool {
        self == Self::Held(mark)
    }
}
