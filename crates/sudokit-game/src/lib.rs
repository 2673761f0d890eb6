//! Play-facing Sudoku puzzle sessions.
//!
//! This crate ties the engine together for an application: it generates a
//! puzzle, guards the given clues against modification, and hands the board
//! to the solver on request. The underlying pieces remain available for
//! callers that need them directly:
//!
//! - [`sudokit_core`] for the board, rules, and difficulty model
//! - [`sudokit_generator`] for generation and carving
//! - [`sudokit_solver`] for the steppable backtracking search
//!
//! # Examples
//!
//! ```
//! use sudokit_core::Difficulty;
//! use sudokit_game::Puzzle;
//!
//! let mut puzzle = Puzzle::new(9, Difficulty::Easy);
//! assert!(!puzzle.is_solved());
//!
//! // Play fills empty cells; givens are protected.
//! let (row, col) = first_empty(&puzzle);
//! puzzle.set_cell(row, col, 1)?;
//! puzzle.clear_cell(row, col)?;
//!
//! // The solver finishes from the current position.
//! let solution = puzzle.begin_solve().run()?;
//! assert_eq!(solution.filled_count(), 81);
//! # fn first_empty(puzzle: &Puzzle) -> (usize, usize) {
//! #     (0..9)
//! #         .flat_map(|row| (0..9).map(move |col| (row, col)))
//! #         .find(|&(row, col)| puzzle.board()[(row, col)].is_empty())
//! #         .unwrap()
//! # }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use derive_more::{Display, Error, From};
use sudokit_core::{Board, Cell, Difficulty, OutOfBounds, rules};
use sudokit_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use sudokit_solver::SolveSession;

/// Errors from play operations on a [`Puzzle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// An attempt to write or clear a given clue.
    #[display("cell ({row}, {col}) is a given and cannot be modified")]
    CannotModifyFixedCell {
        /// Row of the given cell.
        row: usize,
        /// Column of the given cell.
        col: usize,
    },
    /// A coordinate outside the board.
    #[display("{_0}")]
    OutOfBounds(#[from] OutOfBounds),
}

/// A playable Sudoku puzzle.
///
/// Wraps a carved board whose surviving clues are fixed. Mutation goes
/// through [`set_cell`](Self::set_cell) and [`clear_cell`](Self::clear_cell),
/// which refuse to touch fixed cells; everything else about the board is
/// freely readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    board: Board,
    difficulty: Difficulty,
    seed: PuzzleSeed,
}

impl Puzzle {
    /// Generates a fresh `n`×`n` puzzle of the given difficulty.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a valid board dimension (see
    /// [`Board::new`]).
    #[must_use]
    pub fn new(n: usize, difficulty: Difficulty) -> Self {
        PuzzleGenerator::new(n, difficulty).generate().into()
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same dimension, difficulty, and seed always reproduce the same
    /// puzzle.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a valid board dimension (see
    /// [`Board::new`]).
    #[must_use]
    pub fn with_seed(n: usize, difficulty: Difficulty, seed: PuzzleSeed) -> Self {
        PuzzleGenerator::new(n, difficulty)
            .generate_with_seed(seed)
            .into()
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the difficulty the puzzle was carved at.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the seed that reproduces this puzzle.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the coordinate is outside the
    /// board.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, GameError> {
        Ok(self.board.cell(row, col)?)
    }

    /// Writes `value` into the cell at the given coordinate.
    ///
    /// A `value` of `0` clears the cell. The write never changes the fixed
    /// flag; player digits stay modifiable.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the coordinate is outside the
    /// board, or [`GameError::CannotModifyFixedCell`] if the cell is a given.
    ///
    /// # Panics
    ///
    /// Panics if `value > n`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> Result<(), GameError> {
        if self.board.cell(row, col)?.fixed {
            return Err(GameError::CannotModifyFixedCell { row, col });
        }
        self.board.set(row, col, value, false)?;
        Ok(())
    }

    /// Clears the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the coordinate is outside the
    /// board, or [`GameError::CannotModifyFixedCell`] if the cell is a given.
    pub fn clear_cell(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        self.set_cell(row, col, 0)
    }

    /// Returns `true` if the current position breaks no row, column, or box
    /// rule.
    ///
    /// Empty cells are fine; only duplicate digits within a house count as a
    /// violation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        rules::is_valid(&self.board)
    }

    /// Returns `true` if every cell is filled and no rule is violated.
    ///
    /// Any valid completion counts, not just the one the generator carved
    /// from, so puzzles with multiple solutions are handled correctly.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        rules::is_solved(&self.board)
    }

    /// Starts a steppable solve of the current position.
    ///
    /// The session works on a copy; the puzzle itself is untouched. Player
    /// digits already on the board are treated as trial assignments the
    /// search may revise, while givens stay put.
    #[must_use]
    pub fn begin_solve(&self) -> SolveSession {
        SolveSession::new(self.board.clone())
    }
}

impl From<GeneratedPuzzle> for Puzzle {
    fn from(puzzle: GeneratedPuzzle) -> Self {
        let GeneratedPuzzle {
            problem,
            solution: _,
            difficulty,
            seed,
        } = puzzle;
        Self {
            board: problem,
            difficulty,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn easy_9x9() -> Puzzle {
        Puzzle::with_seed(9, Difficulty::Easy, PuzzleSeed::from_phrase("game tests"))
    }

    fn first_empty(puzzle: &Puzzle) -> (usize, usize) {
        let n = puzzle.board().n();
        (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .find(|&(row, col)| puzzle.board()[(row, col)].is_empty())
            .unwrap()
    }

    #[test]
    fn test_new_puzzle_has_carved_givens() {
        let puzzle = easy_9x9();
        // floor(0.25 * 81) = 20 cells removed.
        assert_eq!(puzzle.board().filled_count(), 81 - 20);
        for row in 0..9 {
            for col in 0..9 {
                let cell = puzzle.board()[(row, col)];
                assert_eq!(cell.fixed, !cell.is_empty());
            }
        }
        assert!(puzzle.is_valid());
        assert!(!puzzle.is_solved());
        assert_eq!(puzzle.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_set_cell_rejects_givens() {
        let mut puzzle = easy_9x9();
        let (row, col) = (0..9)
            .flat_map(|row| (0..9).map(move |col| (row, col)))
            .find(|&(row, col)| puzzle.board()[(row, col)].fixed)
            .unwrap();
        let before = puzzle.board()[(row, col)];

        assert_eq!(
            puzzle.set_cell(row, col, 1),
            Err(GameError::CannotModifyFixedCell { row, col })
        );
        assert_eq!(
            puzzle.clear_cell(row, col),
            Err(GameError::CannotModifyFixedCell { row, col })
        );
        assert_eq!(puzzle.board()[(row, col)], before);
    }

    #[test]
    fn test_set_and_clear_player_digit() {
        let mut puzzle = easy_9x9();
        let (row, col) = first_empty(&puzzle);

        puzzle.set_cell(row, col, 9).unwrap();
        let cell = *puzzle.cell(row, col).unwrap();
        assert_eq!(cell.value, 9);
        assert!(!cell.fixed);

        // Player digits stay modifiable.
        puzzle.set_cell(row, col, 3).unwrap();
        puzzle.clear_cell(row, col).unwrap();
        assert!(puzzle.cell(row, col).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_reported() {
        let mut puzzle = easy_9x9();
        assert!(matches!(
            puzzle.cell(9, 0),
            Err(GameError::OutOfBounds(_))
        ));
        assert!(matches!(
            puzzle.set_cell(0, 9, 1),
            Err(GameError::OutOfBounds(_))
        ));
    }

    #[test]
    fn test_begin_solve_completes_the_puzzle() {
        let puzzle = easy_9x9();
        let solution = puzzle.begin_solve().run().unwrap();
        assert_eq!(solution.filled_count(), 81);
        // Givens survive into the solution.
        for row in 0..9 {
            for col in 0..9 {
                let given = puzzle.board()[(row, col)];
                if given.fixed {
                    assert_eq!(solution[(row, col)].value, given.value);
                }
            }
        }
        // The puzzle itself is untouched.
        assert_eq!(puzzle.board().filled_count(), 81 - 20);
    }

    #[test]
    fn test_filling_from_solution_solves_the_game() {
        let generated =
            PuzzleGenerator::new(4, Difficulty::Medium).generate_with_seed(PuzzleSeed::from_phrase("fill"));
        let solution = generated.solution.clone();
        let mut puzzle = Puzzle::from(generated);

        for row in 0..4 {
            for col in 0..4 {
                if puzzle.board()[(row, col)].is_empty() {
                    puzzle.set_cell(row, col, solution[(row, col)].value).unwrap();
                }
            }
        }
        assert!(puzzle.is_solved());
    }

    #[test]
    fn test_same_seed_reproduces_the_game() {
        let seed = PuzzleSeed::from_phrase("replay");
        let a = Puzzle::with_seed(9, Difficulty::Hard, seed);
        let b = Puzzle::with_seed(9, Difficulty::Hard, seed);
        assert_eq!(a, b);
        assert_eq!(a.seed(), seed);
    }
}
