//! Difficulty labels and their removal ratios.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::InvalidDifficulty;

/// A puzzle difficulty label.
///
/// Each label maps to a fixed fraction of the board's cells that the carver
/// blanks out when deriving a puzzle from a solved board. The ratios are
/// constants, not tuned per puzzle.
///
/// # Examples
///
/// ```
/// use sudokit_core::Difficulty;
///
/// let difficulty: Difficulty = "easy".parse()?;
/// assert_eq!(difficulty, Difficulty::Easy);
/// assert_eq!(difficulty.removal_ratio(), 0.25);
/// # Ok::<(), sudokit_core::InvalidDifficulty>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    /// Removes 25% of the cells.
    Easy,
    /// Removes 40% of the cells.
    Medium,
    /// Removes 58% of the cells.
    Hard,
}

impl Difficulty {
    /// Array containing all difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the fraction of cells the carver removes for this difficulty.
    #[must_use]
    pub const fn removal_ratio(self) -> f64 {
        match self {
            Self::Easy => 0.25,
            Self::Medium => 0.40,
            Self::Hard => 0.58,
        }
    }

    /// Returns the lowercase label for this difficulty.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = InvalidDifficulty;

    /// Parses a difficulty label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| InvalidDifficulty {
                name: s.to_owned(),
            })
    }
}
