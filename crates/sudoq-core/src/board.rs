use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 9×9 Sudoku board.
///
/// Each cell holds a value in `0..=9`, where `0` means empty. The board is
/// *valid* when no non-zero value repeats within its row, column, or 3×3 box,
/// *complete* when no zeros remain, and *solved* when complete and valid.
///
/// The board is a plain value type: copying it copies all 81 cells, and no
/// operation on one board can observe another.
///
/// # Examples
///
/// ```
/// use sudoq_core::Board;
///
/// let mut board = Board::new();
/// assert!(!board.is_complete());
///
/// board.set(4, 4, 7);
/// assert_eq!(board.get(4, 4), 7);
/// assert!(!board.is_safe(4, 0, 7)); // 7 already in row 4
/// assert!(board.is_safe(0, 0, 7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[u8; 9]; 9],
}

impl Board {
    /// Creates an empty board (all cells `0`).
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Creates a board from a 9×9 cell array.
    ///
    /// # Panics
    ///
    /// Panics if any cell value is greater than 9.
    #[must_use]
    pub fn from_cells(cells: [[u8; 9]; 9]) -> Self {
        for row in &cells {
            for &value in row {
                assert!(value <= 9, "cell value must be 0-9, got {value}");
            }
        }
        Self { cells }
    }

    /// Returns the value at `(r, c)`, `0` meaning empty.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is not in `0..9`.
    #[must_use]
    pub fn get(&self, r: usize, c: usize) -> u8 {
        assert!(r < 9 && c < 9, "cell index out of range: ({r}, {c})");
        self.cells[r][c]
    }

    /// Sets the value at `(r, c)`; `0` clears the cell.
    ///
    /// No rule checking is performed; use [`Board::is_safe`] first if the
    /// placement must respect the one-per-unit rule.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is not in `0..9`, or if `v > 9`.
    pub fn set(&mut self, r: usize, c: usize, v: u8) {
        assert!(r < 9 && c < 9, "cell index out of range: ({r}, {c})");
        assert!(v <= 9, "cell value must be 0-9, got {v}");
        self.cells[r][c] = v;
    }

    /// Returns a reference to the underlying 9×9 cell array.
    #[must_use]
    pub const fn cells(&self) -> &[[u8; 9]; 9] {
        &self.cells
    }

    /// Checks whether digit `v` can be placed at `(r, c)` without violating
    /// the row, column, or box uniqueness rule.
    ///
    /// The cell `(r, c)` itself is excluded from the scan, so the test
    /// behaves as if that cell were empty regardless of its current content.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is not in `0..9`, or if `v` is not in `1..=9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoq_core::Board;
    ///
    /// let mut board = Board::new();
    /// board.set(0, 0, 3);
    /// assert!(!board.is_safe(0, 8, 3)); // same row
    /// assert!(!board.is_safe(8, 0, 3)); // same column
    /// assert!(!board.is_safe(1, 1, 3)); // same box
    /// assert!(board.is_safe(1, 3, 3));
    /// ```
    #[must_use]
    pub fn is_safe(&self, r: usize, c: usize, v: u8) -> bool {
        assert!(r < 9 && c < 9, "cell index out of range: ({r}, {c})");
        assert!((1..=9).contains(&v), "digit must be 1-9, got {v}");
        for x in 0..9 {
            if x != c && self.cells[r][x] == v {
                return false;
            }
        }
        for y in 0..9 {
            if y != r && self.cells[y][c] == v {
                return false;
            }
        }
        let (br, bc) = (r / 3 * 3, c / 3 * 3);
        for y in br..br + 3 {
            for x in bc..bc + 3 {
                if (y, x) != (r, c) && self.cells[y][x] == v {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if no empty cells remain.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// Returns `true` if the board is complete and every row, column, and
    /// box is a permutation of the digits 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudoq_core::Board;
    ///
    /// let solved: Board =
    ///     "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
    ///         .parse()?;
    /// assert!(solved.is_solved());
    /// assert!(!Board::new().is_solved());
    /// # Ok::<(), sudoq_core::ParseBoardError>(())
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        for r in 0..9 {
            if !unit_ok((0..9).map(|c| self.cells[r][c])) {
                return false;
            }
        }
        for c in 0..9 {
            if !unit_ok((0..9).map(|r| self.cells[r][c])) {
                return false;
            }
        }
        for b in 0..9 {
            let (br, bc) = (b / 3 * 3, b % 3 * 3);
            if !unit_ok((0..9).map(|i| self.cells[br + i / 3][bc + i % 3])) {
                return false;
            }
        }
        true
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v != 0).count()
    }
}

/// Checks that a 9-cell unit contains each of 1-9 exactly once, using a
/// 9-bit seen-mask. Any out-of-range value or duplicate fails.
fn unit_ok(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = 0u16;
    for v in values {
        if !(1..=9).contains(&v) {
            return false;
        }
        let bit = 1 << v;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}

/// Error returned when parsing a [`Board`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The string did not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {found}")]
    BadLength {
        /// Number of cell characters found.
        found: usize,
    },
    /// The string contained a character that is not a cell value.
    #[display("invalid cell character {found:?}")]
    BadCharacter {
        /// The offending character.
        found: char,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses an 81-character row-major board string.
    ///
    /// Digits `1`-`9` are cell values; `0`, `.`, and `_` are empty cells.
    /// ASCII whitespace is ignored, so multi-line grids parse as well.
    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_ascii_whitespace() {
                continue;
            }
            let value = match ch {
                '0' | '.' | '_' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(ParseBoardError::BadCharacter { found: ch }),
            };
            // Keep counting past 81 so BadLength reports the real total
            if count < 81 {
                board.cells[count / 9][count % 9] = value;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::BadLength { found: count });
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Formats the board as 81 digit characters, row-major, `0` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &v in row {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}
