//! Board and cell representation.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::error::{OutOfBounds, ParseBoardError};

/// A single board cell.
///
/// `value == 0` means the cell is empty. A `fixed` cell is a given clue:
/// the generator marks its seeds fixed so the search skips them, and the
/// carver's [`freeze_givens`] pass marks the surviving clues fixed so play
/// never overwrites them.
///
/// [`freeze_givens`]: https://docs.rs/sudokit-generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    /// The cell value in `0..=n`; `0` means empty.
    pub value: u8,
    /// Whether the value is a given that play must not modify.
    pub fixed: bool,
}

impl Cell {
    /// Returns `true` if the cell holds no value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// An N×N grid of [`Cell`]s, where N is a perfect square.
///
/// The grid is stored row-major. Boxes are the `√N`×`√N` sub-squares tiling
/// the grid; the canonical board is 9×9 with 3×3 boxes.
///
/// The checked accessors [`cell`](Self::cell) and [`set`](Self::set) report
/// out-of-range coordinates as [`OutOfBounds`]; the `board[(row, col)]`
/// index operators panic instead and are meant for code that has already
/// established its coordinates, such as the search engine and tests.
///
/// # Examples
///
/// ```
/// use sudokit_core::Board;
///
/// let mut board = Board::new(9);
/// board.set(0, 0, 5, false)?;
/// assert_eq!(board.cell(0, 0)?.value, 5);
/// assert!(board.cell(9, 0).is_err());
/// # Ok::<(), sudokit_core::OutOfBounds>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    box_size: usize,
    n: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an `n`×`n` board of empty, non-fixed cells.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a positive perfect square, or if `n` does not
    /// fit in a cell value (`n > 255`).
    #[must_use]
    pub fn new(n: usize) -> Self {
        let box_size = n.isqrt();
        assert!(
            n > 0 && box_size * box_size == n,
            "board dimension must be a positive perfect square, got {n}"
        );
        assert!(
            u8::try_from(n).is_ok(),
            "board dimension {n} does not fit in a cell value"
        );
        Self {
            box_size,
            n,
            cells: vec![Cell::default(); n * n],
        }
    }

    /// Returns the board dimension N.
    #[must_use]
    pub const fn n(&self) -> usize {
        self.n
    }

    /// Returns the box dimension `√N`.
    #[must_use]
    pub const fn box_size(&self) -> usize {
        self.box_size
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row < self.n && col < self.n {
            Ok(row * self.n + col)
        } else {
            Err(OutOfBounds {
                row,
                col,
                n: self.n,
            })
        }
    }

    /// Returns the cell at the given coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `row` or `col` is not in `0..n`.
    pub fn cell(&self, row: usize, col: usize) -> Result<&Cell, OutOfBounds> {
        let i = self.index_of(row, col)?;
        Ok(&self.cells[i])
    }

    /// Assigns `(value, fixed)` to the cell at the given coordinate.
    ///
    /// This is the raw mutation primitive: it overwrites fixed cells without
    /// complaint. Policy about givens lives at the caller boundary.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] if `row` or `col` is not in `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `value > n`.
    pub fn set(&mut self, row: usize, col: usize, value: u8, fixed: bool) -> Result<(), OutOfBounds> {
        assert!(
            usize::from(value) <= self.n,
            "cell value {value} exceeds board dimension {}",
            self.n
        );
        let i = self.index_of(row, col)?;
        self.cells[i] = Cell { value, fixed };
        Ok(())
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Index<(usize, usize)> for Board {
    type Output = Cell;

    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    fn index(&self, (row, col): (usize, usize)) -> &Cell {
        assert!(row < self.n && col < self.n);
        &self.cells[row * self.n + col]
    }
}

impl IndexMut<(usize, usize)> for Board {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Cell {
        assert!(row < self.n && col < self.n);
        &mut self.cells[row * self.n + col]
    }
}

impl Display for Board {
    /// Writes the board as one row-major line of cell characters.
    ///
    /// Empty cells print as `.`; values print as base-36 digits, so `1`-`9`
    /// for the canonical board and lowercase letters beyond that.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            let c = char::from_digit(u32::from(cell.value), 36)
                .filter(|_| !cell.is_empty())
                .unwrap_or('.');
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from cell characters, whitespace ignored.
    ///
    /// `.`, `_`, and `0` mean empty; base-36 digits mean filled. The board
    /// dimension is inferred from the character count, which must be N² for
    /// a perfect-square N. Parsed digits are marked fixed, matching their
    /// role as the givens of a textual puzzle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let count = chars.len();
        let n = count.isqrt();
        let box_size = n.isqrt();
        if n * n != count || box_size * box_size != n || n == 0 || u8::try_from(n).is_err() {
            return Err(ParseBoardError::InvalidLength { count });
        }

        let mut board = Self::new(n);
        for (i, &c) in chars.iter().enumerate() {
            let value = match c {
                '.' | '_' | '0' => 0,
                _ => {
                    let digit = c
                        .to_digit(36)
                        .ok_or(ParseBoardError::InvalidChar { character: c })?;
                    #[expect(clippy::cast_possible_truncation)] // base-36 digits are < 36
                    let digit = digit as u8;
                    if usize::from(digit) > n {
                        return Err(ParseBoardError::DigitOutOfRange { value: digit, n });
                    }
                    digit
                }
            };
            board.cells[i] = Cell {
                value,
                fixed: value != 0,
            };
        }
        Ok(board)
    }
}
