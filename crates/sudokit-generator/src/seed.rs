//! Seed material for reproducible generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use derive_more::{Display, Error};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Errors from parsing a textual seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed text has {len} characters, expected 64")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character that is not a hexadecimal digit.
    #[display("invalid seed character {character:?}")]
    InvalidChar {
        /// The offending character.
        character: char,
    },
}

/// 32 bytes of seed material driving all generator randomness.
///
/// A seed fully determines the generated solution and the carved puzzle, so
/// persisting or sharing the seed is enough to reproduce a game. Seeds
/// render as 64 lowercase hex characters and parse back from the same form.
///
/// # Examples
///
/// ```
/// use sudokit_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("rainy tuesday");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<PuzzleSeed>()?, seed);
/// # Ok::<(), sudokit_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from fresh OS entropy.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::rng().random())
    }

    /// Derives a seed from an arbitrary phrase via SHA-256.
    ///
    /// The same phrase always yields the same seed, which makes
    /// human-memorable reproducible puzzles possible.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Builds the deterministic RNG this seed drives.
    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(ParseSeedError::InvalidLength { len });
        }
        let mut bytes = [0u8; 32];
        for (i, c) in s.chars().enumerate() {
            let digit = c
                .to_digit(16)
                .ok_or(ParseSeedError::InvalidChar { character: c })?;
            #[expect(clippy::cast_possible_truncation)] // hex digits are < 16
            let digit = digit as u8;
            bytes[i / 2] = bytes[i / 2] << 4 | digit;
        }
        Ok(Self(bytes))
    }
}
