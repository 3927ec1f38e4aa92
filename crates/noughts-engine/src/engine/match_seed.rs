use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 128-bit seed for the match random number generators.
///
/// The same seed reproduces the same first-mover draws and, when handed to a seedable
/// opponent, the same random choices. Serialized and parsed as a 32-character hex string.
///
/// # Example
///
/// ```
/// use noughts_engine::MatchSeed;
/// use rand::Rng as _;
///
/// let seed: MatchSeed = rand::rng().random();
/// let parsed: MatchSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSeed([u8; 16]);

impl MatchSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds a generator from this seed.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for MatchSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

/// Hex string is not a valid seed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed: {input:?} (expected 32 hex characters)")]
pub struct ParseMatchSeedError {
    pub input: String,
}

impl FromStr for MatchSeed {
    type Err = ParseMatchSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMatchSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for MatchSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MatchSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random seeds with `rng.random()`.
impl Distribution<MatchSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        MatchSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore as _;

    use super::*;

    #[test]
    fn test_roundtrip_random_seed() {
        let seed: MatchSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: MatchSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(seed, deserialized);
    }

    #[test]
    fn test_known_value_sequential_bytes() {
        let seed = MatchSeed::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        assert_eq!(
            serde_json::to_string(&seed).unwrap(),
            "\"0123456789abcdeffedcba9876543210\""
        );
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let seed: MatchSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_parse_errors() {
        for input in [
            "",
            "0123456789abcdef0123456789abcde",
            "0123456789abcdef0123456789abcdef0",
            "ghijklmnopqrstuvwxyzghijklmnopqr",
            "+0000000000000000000000000000001",
            "-0000000000000000000000000000001",
        ] {
            assert!(input.parse::<MatchSeed>().is_err(), "{input:?}");
        }
        let err = serde_json::from_str::<MatchSeed>("\"xyz\"").unwrap_err();
        assert!(err.to_string().contains("invalid hex seed"));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let seed = MatchSeed::from_bytes([7; 16]);
        let mut rng1 = seed.rng();
        let mut rng2 = seed.rng();
        for _ in 0..20 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }
}
