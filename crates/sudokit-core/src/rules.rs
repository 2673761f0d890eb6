//! Row, column, and box uniqueness rules.
//!
//! These checks are the legality oracle for the whole engine: the search
//! consults [`can_place`] before every trial assignment, the UI consults
//! [`is_valid`] after every player move, and [`is_solved`] is the terminal
//! test for both. None of them mutate the board.
//!
//! All coordinate arguments must be in range; these helpers panic on
//! out-of-range input rather than returning an error, since their callers
//! iterate coordinates the board itself produced.

use crate::Board;

/// Returns `true` if `value` already occurs in the given row.
#[must_use]
pub fn is_value_in_row(board: &Board, row: usize, value: u8) -> bool {
    (0..board.n()).any(|col| board[(row, col)].value == value)
}

/// Returns `true` if `value` already occurs in the given column.
#[must_use]
pub fn is_value_in_col(board: &Board, col: usize, value: u8) -> bool {
    (0..board.n()).any(|row| board[(row, col)].value == value)
}

/// Returns `true` if `value` already occurs in the box whose top-left cell
/// is `(box_row, box_col)`.
///
/// The origin of the box containing `(row, col)` is `row - row % box_size`,
/// `col - col % box_size`.
#[must_use]
pub fn is_value_in_box(board: &Board, box_row: usize, box_col: usize, value: u8) -> bool {
    let size = board.box_size();
    (box_row..box_row + size)
        .any(|row| (box_col..box_col + size).any(|col| board[(row, col)].value == value))
}

/// Returns `true` if placing `value` at `(row, col)` would break no row,
/// column, or box uniqueness rule.
///
/// The cell's current content is not special-cased: a value already present
/// in the cell's own row, column, or box blocks placement.
#[must_use]
pub fn can_place(board: &Board, row: usize, col: usize, value: u8) -> bool {
    let size = board.box_size();
    !(is_value_in_row(board, row, value)
        || is_value_in_col(board, col, value)
        || is_value_in_box(board, row - row % size, col - col % size, value))
}

/// Returns `true` if no nonzero value occurs twice in any row, column, or
/// box.
///
/// Empty cells (`value == 0`) never count as conflicts. The scan keeps
/// per-row, per-column, and per-box occurrence counters and short-circuits
/// on the first counter that exceeds one.
#[must_use]
pub fn is_valid(board: &Board) -> bool {
    let n = board.n();
    let size = board.box_size();
    let mut row_counts = vec![0u8; n * (n + 1)];
    let mut col_counts = vec![0u8; n * (n + 1)];
    let mut box_counts = vec![0u8; n * (n + 1)];

    for row in 0..n {
        for col in 0..n {
            let value = usize::from(board[(row, col)].value);
            if value == 0 {
                continue;
            }
            let box_index = (row / size) * size + col / size;

            row_counts[row * (n + 1) + value] += 1;
            col_counts[col * (n + 1) + value] += 1;
            box_counts[box_index * (n + 1) + value] += 1;

            if row_counts[row * (n + 1) + value] > 1
                || col_counts[col * (n + 1) + value] > 1
                || box_counts[box_index * (n + 1) + value] > 1
            {
                return false;
            }
        }
    }
    true
}

/// Returns `true` if no cell is empty.
#[must_use]
pub fn is_completely_filled(board: &Board) -> bool {
    board.filled_count() == board.n() * board.n()
}

/// Returns `true` if the board is both valid and completely filled.
#[must_use]
pub fn is_solved(board: &Board) -> bool {
    is_valid(board) && is_completely_filled(board)
}
