//! Error types shared across the engine.

use derive_more::{Display, Error};

/// A coordinate outside the board.
///
/// Returned by [`Board::cell`](crate::Board::cell) and
/// [`Board::set`](crate::Board::set); coordinates are never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("coordinate ({row}, {col}) is outside the {n}x{n} board")]
pub struct OutOfBounds {
    /// The offending row.
    pub row: usize,
    /// The offending column.
    pub col: usize,
    /// The board dimension.
    pub n: usize,
}

/// An unrecognized difficulty label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unrecognized difficulty: {name:?}")]
pub struct InvalidDifficulty {
    /// The label that failed to parse.
    pub name: String,
}

/// Errors from parsing a textual board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The number of cell characters is not a fourth power, so no perfect
    /// square board dimension fits it.
    #[display("board text has {count} cells, which does not form a square board")]
    InvalidLength {
        /// Number of cell characters found.
        count: usize,
    },
    /// A character that is neither a digit nor an empty-cell marker.
    #[display("invalid cell character {character:?}")]
    InvalidChar {
        /// The offending character.
        character: char,
    },
    /// A digit larger than the board dimension.
    #[display("digit {value} exceeds the board dimension {n}")]
    DigitOutOfRange {
        /// The parsed digit value.
        value: u8,
        /// The board dimension.
        n: usize,
    },
}
