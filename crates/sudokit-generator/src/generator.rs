//! Solved-board generation and the full puzzle pipeline.

use std::time::Instant;

use rand::{Rng, seq::SliceRandom as _};
use sudokit_core::{Board, Cell, Difficulty, rules};
use sudokit_solver::solve;

use crate::{
    carve::{freeze_givens, remove_digits},
    seed::PuzzleSeed,
};

/// A generated puzzle together with its solution and provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable board: carved, with surviving digits fixed.
    pub problem: Board,
    /// The solved board the problem was carved from.
    pub solution: Board,
    /// The difficulty the carver applied.
    pub difficulty: Difficulty,
    /// The seed that reproduces this exact puzzle.
    pub seed: PuzzleSeed,
}

/// Generates solved boards and carves playable puzzles from them.
///
/// The solved board is built in two phases. The `√N` boxes along the main
/// diagonal share no row, column, or box with one another, so each is first
/// filled with an unconstrained random permutation of `1..=N`; this seeding
/// cuts the subsequent search space dramatically compared to backtracking
/// from an empty grid. The backtracking solver then completes the remaining
/// cells.
///
/// # Examples
///
/// ```
/// use sudokit_core::{Difficulty, rules};
/// use sudokit_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new(9, Difficulty::Medium);
/// let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("docs"));
///
/// assert!(rules::is_solved(&puzzle.solution));
/// assert_eq!(puzzle.problem.filled_count(), 81 - 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    n: usize,
    difficulty: Difficulty,
}

impl PuzzleGenerator {
    /// Creates a generator for `n`×`n` puzzles of the given difficulty.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a valid board dimension (see
    /// [`Board::new`]).
    #[must_use]
    pub fn new(n: usize, difficulty: Difficulty) -> Self {
        // Fail on a bad dimension at construction, not first use.
        let _ = Board::new(n);
        Self { n, difficulty }
    }

    /// Generates a puzzle from fresh entropy.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same generator configuration and seed always produce the same
    /// puzzle.
    ///
    /// # Panics
    ///
    /// Panics if the diagonally seeded board cannot be completed. The
    /// seeding construction guarantees a completion exists, so this is an
    /// internal invariant violation, never an expected outcome, and it is
    /// deliberately not retried.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = seed.rng();

        let start = Instant::now();
        let solution = self.generate_solution(&mut rng);
        log::debug!(
            "generated {n}x{n} solution in {elapsed:?}",
            n = self.n,
            elapsed = start.elapsed()
        );

        let mut problem = solution.clone();
        remove_digits(&mut problem, self.difficulty, &mut rng);
        freeze_givens(&mut problem);

        GeneratedPuzzle {
            problem,
            solution,
            difficulty: self.difficulty,
            seed,
        }
    }

    fn generate_solution<R>(&self, rng: &mut R) -> Board
    where
        R: Rng + ?Sized,
    {
        let mut board = Board::new(self.n);
        seed_diagonal_boxes(&mut board, rng);

        let mut solution = match solve(&board) {
            Ok(solution) => solution,
            Err(err) => {
                log::error!(
                    "diagonally seeded {n}x{n} board failed to solve: {err}",
                    n = self.n
                );
                panic!("generation invariant violated: seeded board is unsolvable");
            }
        };

        // The seeding flags were only there so the search would skip the
        // diagonal boxes; the carver assigns the real givens later.
        for row in 0..self.n {
            for col in 0..self.n {
                solution[(row, col)].fixed = false;
            }
        }
        debug_assert!(rules::is_solved(&solution));
        solution
    }
}

/// Fills each box on the main diagonal with its own random permutation.
///
/// The box with top-left corner `(k·√N, k·√N)` receives a fresh permutation
/// of `1..=N` laid out row-major; the seeded cells are marked fixed so the
/// completion search leaves them alone.
fn seed_diagonal_boxes<R>(board: &mut Board, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let size = board.box_size();
    for k in 0..size {
        let digits = random_permutation(board.n(), rng);
        fill_box(board, k * size, k * size, &digits);
    }
}

fn fill_box(board: &mut Board, start_row: usize, start_col: usize, digits: &[u8]) {
    let size = board.box_size();
    for i in 0..size {
        for j in 0..size {
            board[(start_row + i, start_col + j)] = Cell {
                value: digits[i * size + j],
                fixed: true,
            };
        }
    }
}

/// Returns a uniformly random permutation of `1..=n`.
fn random_permutation<R>(n: usize, rng: &mut R) -> Vec<u8>
where
    R: Rng + ?Sized,
{
    #[expect(clippy::cast_possible_truncation)] // board dimensions fit in u8
    let mut digits: Vec<u8> = (1..=n as u8).collect();
    digits.shuffle(rng);
    digits
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    #[test]
    fn test_generated_solution_is_solved() {
        let generator = PuzzleGenerator::new(9, Difficulty::Easy);
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("solution"));
        assert!(rules::is_solved(&puzzle.solution));
        assert_eq!(puzzle.solution.n(), 9);
    }

    #[test]
    fn test_problem_is_carved_and_frozen() {
        let generator = PuzzleGenerator::new(9, Difficulty::Easy);
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("carved"));

        assert_eq!(puzzle.problem.filled_count(), 81 - 20);
        for row in 0..9 {
            for col in 0..9 {
                let cell = puzzle.problem[(row, col)];
                assert_eq!(cell.fixed, !cell.is_empty());
                if !cell.is_empty() {
                    assert_eq!(cell.value, puzzle.solution[(row, col)].value);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_puzzle() {
        let generator = PuzzleGenerator::new(9, Difficulty::Medium);
        let seed = PuzzleSeed::from_phrase("replay");
        assert_eq!(
            generator.generate_with_seed(seed),
            generator.generate_with_seed(seed)
        );
    }

    #[test]
    fn test_different_seeds_vary() {
        let generator = PuzzleGenerator::new(9, Difficulty::Medium);
        let a = generator.generate_with_seed(PuzzleSeed::from_phrase("a"));
        let b = generator.generate_with_seed(PuzzleSeed::from_phrase("b"));
        assert_ne!(a.solution, b.solution);
    }

    #[test]
    fn test_generates_small_boards() {
        let generator = PuzzleGenerator::new(4, Difficulty::Hard);
        let puzzle = generator.generate_with_seed(PuzzleSeed::from_phrase("small"));
        assert!(rules::is_solved(&puzzle.solution));
        // floor(0.58 * 16) = 9 cells removed.
        assert_eq!(puzzle.problem.filled_count(), 16 - 9);
    }

    #[test]
    #[should_panic(expected = "positive perfect square")]
    fn test_rejects_non_square_dimension() {
        let _ = PuzzleGenerator::new(7, Difficulty::Easy);
    }

    #[test]
    fn test_diagonal_seeding_is_mutually_consistent() {
        let mut board = Board::new(9);
        seed_diagonal_boxes(&mut board, &mut Pcg64::from_seed([3; 32]));

        assert_eq!(board.filled_count(), 27);
        assert!(rules::is_valid(&board));
        for k in 0..3 {
            for i in 0..3 {
                for j in 0..3 {
                    let cell = board[(k * 3 + i, k * 3 + j)];
                    assert!(cell.fixed);
                    assert!(!cell.is_empty());
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_permutation_has_same_multiset(n in 1usize..=30, seed: [u8; 32]) {
            let mut rng = Pcg64::from_seed(seed);
            let mut permutation = random_permutation(n, &mut rng);
            permutation.sort_unstable();
            #[expect(clippy::cast_possible_truncation)]
            let expected: Vec<u8> = (1..=n as u8).collect();
            prop_assert_eq!(permutation, expected);
        }

        #[test]
        fn prop_generated_solutions_are_valid(seed: [u8; 32]) {
            let generator = PuzzleGenerator::new(9, Difficulty::Medium);
            let puzzle = generator.generate_with_seed(PuzzleSeed::from_bytes(seed));
            prop_assert!(rules::is_solved(&puzzle.solution));
            prop_assert!(rules::is_valid(&puzzle.problem));
        }
    }
}
