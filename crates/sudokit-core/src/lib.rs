//! Core data structures and rules for the Sudoku engine.
//!
//! This crate provides the board model and the rule checker shared by puzzle
//! generation, solving, and game management:
//!
//! - [`board`]: the N×N grid of [`Cell`]s, where N is a perfect square
//!   (canonically 9) and each cell holds a value plus a "given" flag
//! - [`rules`]: row/column/box uniqueness checks and single-cell legality
//! - [`difficulty`]: the fixed difficulty labels and their removal ratios
//! - [`error`]: the error types shared across the workspace
//!
//! # Examples
//!
//! ```
//! use sudokit_core::{Board, rules};
//!
//! let board: Board = "\
//!     1234 \
//!     3412 \
//!     2143 \
//!     4321"
//!     .parse()?;
//!
//! assert!(rules::is_solved(&board));
//! assert!(!rules::can_place(&board, 0, 0, 2));
//! # Ok::<(), sudokit_core::error::ParseBoardError>(())
//! ```

pub mod board;
pub mod difficulty;
pub mod error;
pub mod rules;

pub use self::{
    board::{Board, Cell},
    difficulty::Difficulty,
    error::{InvalidDifficulty, OutOfBounds},
};
