//! Randomized Sudoku puzzle generation.
//!
//! Generation is a three-stage pipeline:
//!
//! 1. [`PuzzleGenerator`] seeds the diagonal boxes with independent random
//!    permutations and completes the board with the backtracking solver,
//!    producing a fully solved grid.
//! 2. [`remove_digits`] blanks a difficulty-determined number of cells.
//! 3. [`freeze_givens`] marks the surviving digits as fixed clues.
//!
//! All randomness flows from a [`PuzzleSeed`], so any puzzle can be
//! reproduced from the 64-hex-character seed it carries.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::{Difficulty, rules};
//! use sudokit_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(9, Difficulty::Easy);
//! let puzzle = generator.generate();
//!
//! assert!(rules::is_solved(&puzzle.solution));
//! assert!(!rules::is_completely_filled(&puzzle.problem));
//!
//! // The seed replays the exact same puzzle.
//! let replay = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(replay.problem, puzzle.problem);
//! ```

pub mod carve;
pub mod generator;
pub mod seed;

pub use self::{
    carve::{freeze_givens, remove_digits},
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
