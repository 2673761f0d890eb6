//! The resumable backtracking search.

use derive_more::{Display, Error};
use sudokit_core::{Board, Cell, rules};

/// The search exhausted every candidate without finding a solution.
///
/// From [`solve`] this signals a contradictory starting board. A
/// [`SolveSession`] never produces it: an unsolvable board is an expected
/// input there, reported as plain exhaustion of the snapshot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("backtracking exhausted every candidate without finding a solution")]
pub struct UnsolvableBoard;

/// A choice point: the cell being decided and the next digit to try there.
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: usize,
    next: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Advance the cursor past fixed cells to the next cell to decide.
    Seek,
    /// Try the next digit at the deepest choice point.
    Trial,
    /// Solution found; confirm it up through the remaining choice points.
    Unwind,
    Done,
}

/// A paused-and-resumable backtracking search over one board.
///
/// The session owns a working copy of the board and a stack of
/// [`Frame`] choice points, replacing the recursion and coroutine of a
/// conventional backtracker with state that can stop after any step. Each
/// [`advance`](Self::advance) performs exactly one state-producing event and
/// returns a snapshot of the board:
///
/// - a **trial assignment**: the first legal digit (ascending order) is
///   written at the current cell, or
/// - a **confirmation**: the search has succeeded and reports the solved
///   board once for the base case and once per choice point as it unwinds.
///
/// Fixed cells are skipped without consuming a step, and resetting a cell on
/// backtrack is not an event. The snapshot sequence is finite and consumed
/// exactly once; starting over means constructing a new session. When the
/// sequence is exhausted, [`solution`](Self::solution) tells a solved search
/// apart from an unsolvable board.
///
/// # Examples
///
/// ```
/// use sudokit_core::Board;
/// use sudokit_solver::SolveSession;
///
/// let board: Board = "\
///     1234 \
///     3412 \
///     21.3 \
///     43.1"
///     .parse()
///     .unwrap();
///
/// let mut session = SolveSession::new(board);
/// let mut last = None;
/// while let Some(snapshot) = session.advance() {
///     last = Some(snapshot);
/// }
/// assert_eq!(session.solution(), last.as_ref());
/// ```
#[derive(Debug, Clone)]
pub struct SolveSession {
    board: Board,
    stack: Vec<Frame>,
    cursor: usize,
    phase: Phase,
    solved: bool,
}

impl SolveSession {
    /// Begins a search over the given board.
    ///
    /// Fixed cells are treated as immutable givens; non-fixed cells,
    /// including any that already hold values, are open to the search.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            stack: Vec::new(),
            cursor: 0,
            phase: Phase::Seek,
            solved: false,
        }
    }

    /// Advances the search by one event and returns the resulting snapshot.
    ///
    /// Returns `None` once the search has finished, either solved or
    /// exhausted; the session then stays finished forever.
    pub fn advance(&mut self) -> Option<Board> {
        self.step().then(|| self.board.clone())
    }

    /// Returns `true` once the snapshot sequence is exhausted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Returns the solved board, if the search has found one.
    #[must_use]
    pub fn solution(&self) -> Option<&Board> {
        self.solved.then_some(&self.board)
    }

    /// Runs the remaining search to completion without cloning snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`UnsolvableBoard`] if the search exhausts every candidate.
    pub fn run(mut self) -> Result<Board, UnsolvableBoard> {
        while self.step() {}
        if self.solved {
            Ok(self.board)
        } else {
            Err(UnsolvableBoard)
        }
    }

    /// Performs one event; `false` means the search is finished.
    fn step(&mut self) -> bool {
        let n = self.board.n();
        let total = n * n;
        #[expect(clippy::cast_possible_truncation)] // board dimensions fit in u8
        let max_digit = n as u8;

        loop {
            match self.phase {
                Phase::Done => return false,
                Phase::Unwind => {
                    if self.stack.pop().is_some() {
                        return true;
                    }
                    self.phase = Phase::Done;
                    return false;
                }
                Phase::Seek => {
                    while self.cursor < total && self.board[(self.cursor / n, self.cursor % n)].fixed
                    {
                        self.cursor += 1;
                    }
                    if self.cursor < total {
                        self.stack.push(Frame {
                            cell: self.cursor,
                            next: 1,
                        });
                        self.phase = Phase::Trial;
                    } else if rules::is_valid(&self.board) {
                        // Past the last cell with a coherent board: solved.
                        self.solved = true;
                        self.phase = Phase::Unwind;
                        return true;
                    } else {
                        // The full board failed revalidation; retreat into
                        // the deepest choice point.
                        self.phase = Phase::Trial;
                    }
                }
                Phase::Trial => {
                    let Some(frame) = self.stack.last_mut() else {
                        // Every choice point is exhausted: unsolvable.
                        self.phase = Phase::Done;
                        return false;
                    };
                    let (row, col) = (frame.cell / n, frame.cell % n);

                    // Undo half of the tentatively-assign/undo protocol:
                    // clear the cell before trying the next digit.
                    self.board[(row, col)] = Cell::default();

                    let mut placed = None;
                    while frame.next <= max_digit {
                        let digit = frame.next;
                        frame.next += 1;
                        if rules::can_place(&self.board, row, col, digit) {
                            placed = Some(digit);
                            break;
                        }
                    }

                    if let Some(digit) = placed {
                        self.board[(row, col)] = Cell {
                            value: digit,
                            fixed: false,
                        };
                        self.cursor = frame.cell + 1;
                        self.phase = Phase::Seek;
                        return true;
                    }

                    // No digit fits; the cell stays empty and the previous
                    // choice point resumes without yielding.
                    self.stack.pop();
                }
            }
        }
    }
}

impl Iterator for SolveSession {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        self.advance()
    }
}

/// Solves the board in one shot.
///
/// Runs the same search as [`SolveSession`] to completion over a copy of the
/// input; the input board is left untouched.
///
/// # Errors
///
/// Returns [`UnsolvableBoard`] if the board admits no solution.
pub fn solve(board: &Board) -> Result<Board, UnsolvableBoard> {
    SolveSession::new(board.clone()).run()
}
