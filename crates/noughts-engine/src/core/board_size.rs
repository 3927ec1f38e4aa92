use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{InvalidBoardSizeError, ParseBoardSizeError};

/// Validated board side length: 3, 4 or 5.
///
/// Serialized as a plain number; deserializing any other value fails.
///
/// # Example
///
/// ```
/// use noughts_engine::BoardSize;
///
/// let size = BoardSize::try_from(4).unwrap();
/// assert_eq!(size.side(), 4);
/// assert_eq!(size.cell_count(), 16);
/// assert!(BoardSize::try_from(6).is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
#[display("{_0}")]
pub struct BoardSize(u8);

impl BoardSize {
    /// Largest supported side length, used to size per-line buffers.
    pub const MAX_SIDE: usize = 5;

    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);
    pub const ALL: [Self; 3] = [Self::THREE, Self::FOUR, Self::FIVE];

    #[must_use]
    pub const fn side(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::THREE
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = InvalidBoardSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|s| s.side() == size)
            .ok_or(InvalidBoardSizeError { size })
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.side()
    }
}

impl From<BoardSize> for u16 {
    fn from(size: BoardSize) -> Self {
        size.0.into()
    }
}

impl FromStr for BoardSize {
    type Err = ParseBoardSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(ParseBoardSizeError::NotANumber)?;
        Self::try_from(size).map_err(ParseBoardSizeError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_accepts_supported_sizes() {
        for n in 3..=5 {
            assert_eq!(BoardSize::try_from(n).unwrap().side(), n);
        }
    }

    #[test]
    fn test_try_from_rejects_other_sizes() {
        for n in [0, 1, 2, 6, 10] {
            assert_eq!(BoardSize::try_from(n), Err(InvalidBoardSizeError { size: n }));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("4".parse::<BoardSize>(), Ok(BoardSize::FOUR));
        assert_eq!(" 5 ".parse::<BoardSize>(), Ok(BoardSize::FIVE));
        assert!(matches!(
            "7".parse::<BoardSize>(),
            Err(ParseBoardSizeError::Invalid(_))
        ));
        assert!(matches!(
            "three".parse::<BoardSize>(),
            Err(ParseBoardSizeError::NotANumber(_))
        ));
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&BoardSize::FIVE).unwrap(), "5");
        assert_eq!(
            serde_json::from_str::<BoardSize>("3").unwrap(),
            BoardSize::THREE
        );
        let err = serde_json::from_str::<BoardSize>("8").unwrap_err();
        assert!(err.to_string().contains("board size must be 3, 4 or 5"));
    }
}
