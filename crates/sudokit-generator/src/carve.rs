//! Turning a solved board into a playable puzzle.

use rand::{Rng, RngExt as _};
use sudokit_core::{Board, Cell, Difficulty};

/// Blanks a difficulty-determined number of cells.
///
/// The removal count is `floor(ratio · n²)`, clamped so that at least one
/// filled cell survives. Cells are picked by rejection sampling: random
/// coordinates are drawn until enough distinct filled cells have been
/// cleared, and re-drawing an already-emptied cell never double-counts.
/// Cleared cells lose their value and their fixed flag.
///
/// No uniqueness check is performed; the carved puzzle may admit more than
/// one solution.
pub fn remove_digits<R>(board: &mut Board, difficulty: Difficulty, rng: &mut R)
where
    R: Rng + ?Sized,
{
    let n = board.n();
    #[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)] // removal ratios are in (0, 1)
    let target = (difficulty.removal_ratio() * ((n * n) as f64)).floor() as usize;
    let target = target.min(board.filled_count().saturating_sub(1));

    let mut removed = 0;
    while removed < target {
        let row = rng.random_range(0..n);
        let col = rng.random_range(0..n);
        if !board[(row, col)].is_empty() {
            board[(row, col)] = Cell::default();
            removed += 1;
        }
    }
}

/// Freezes every remaining digit as a given clue.
///
/// Sets `fixed = (value != 0)` for every cell. Applied once after carving;
/// play never changes the flags again.
pub fn freeze_givens(board: &mut Board) {
    let n = board.n();
    for row in 0..n {
        for col in 0..n {
            let cell = &mut board[(row, col)];
            cell.fixed = !cell.is_empty();
        }
    }
}
