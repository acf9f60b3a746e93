use crate::Board;

/// A 9×9 boolean mask marking the clue cells of a puzzle.
///
/// A clue is a cell that was non-empty in the puzzle as given. The mask is
/// advisory: the core never prevents writes to clue cells, that contract
/// belongs to the embedding game layer.
///
/// # Examples
///
/// ```
/// use sudoq_core::{Board, ClueMask};
///
/// let mut board = Board::new();
/// board.set(0, 0, 5);
///
/// let mask = ClueMask::from_board(&board);
/// assert!(mask.is_fixed(0, 0));
/// assert!(!mask.is_fixed(0, 1));
/// assert_eq!(mask.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClueMask {
    cells: [[bool; 9]; 9],
}

impl ClueMask {
    /// Creates a mask with no fixed cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[false; 9]; 9],
        }
    }

    /// Creates a mask from a 9×9 boolean array.
    #[must_use]
    pub const fn from_cells(cells: [[bool; 9]; 9]) -> Self {
        Self { cells }
    }

    /// Creates the indicator mask of a board's non-empty cells.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut cells = [[false; 9]; 9];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, fixed) in row.iter_mut().enumerate() {
                *fixed = board.get(r, c) != 0;
            }
        }
        Self { cells }
    }

    /// Returns `true` if `(r, c)` is a clue cell.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is not in `0..9`.
    #[must_use]
    pub fn is_fixed(&self, r: usize, c: usize) -> bool {
        assert!(r < 9 && c < 9, "cell index out of range: ({r}, {c})");
        self.cells[r][c]
    }

    /// Returns a reference to the underlying 9×9 boolean array.
    #[must_use]
    pub const fn cells(&self) -> &[[bool; 9]; 9] {
        &self.cells
    }

    /// Returns the number of clue cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&fixed| fixed).count()
    }
}
