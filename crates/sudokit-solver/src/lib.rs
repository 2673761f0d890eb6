//! Backtracking search for Sudoku boards.
//!
//! One engine serves two callers. [`solve`] runs the search to completion
//! and returns the solved board or [`UnsolvableBoard`]. [`SolveSession`] runs
//! the same search cooperatively, suspending after every state-producing
//! event so a caller can animate or inspect the search one snapshot at a
//! time.
//!
//! The search visits cells in row-major order, skips fixed cells, and tries
//! digits in ascending order, testing each against
//! [`rules::can_place`](sudokit_core::rules::can_place). A failed subtree
//! resets its cell to empty before retreating. Success re-validates the
//! whole board as a final sanity check.
//!
//! # Examples
//!
//! ```
//! use sudokit_core::{Board, rules};
//! use sudokit_solver::{SolveSession, solve};
//!
//! let puzzle: Board = "\
//!     12.4 \
//!     34.2 \
//!     2..3 \
//!     43.1"
//!     .parse()?;
//!
//! // One-shot.
//! let solution = solve(&puzzle).expect("puzzle is solvable");
//! assert!(rules::is_solved(&solution));
//!
//! // Stepwise: the last snapshot is the solution.
//! let last = SolveSession::new(puzzle).last().expect("puzzle is solvable");
//! assert_eq!(last, solution);
//! # Ok::<(), sudokit_core::error::ParseBoardError>(())
//! ```

pub mod session;

pub use self::session::{SolveSession, UnsolvableBoard, solve};
