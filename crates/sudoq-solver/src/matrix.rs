//! Toroidal doubly-linked sparse matrix for the exact-cover search.
//!
//! The matrix is stored as an arena of nodes addressed by `usize` index, so
//! every link is plain integer arithmetic and the cyclic four-way structure
//! needs no reference counting. Node 0 is the root header, nodes `1..=324`
//! are the column headers, and row nodes follow in insertion order. The whole
//! arena fits in `1 + 324 + 4 * 729 = 3241` nodes.

use sudoq_core::Board;

/// Number of constraint columns: 81 cell + 81 row-digit + 81 column-digit +
/// 81 box-digit constraints.
pub(crate) const COLUMNS: usize = 324;

/// Maximum number of candidate placement rows (one per `(r, c, d)` triple).
pub(crate) const CANDIDATES: usize = 729;

const MAX_NODES: usize = 1 + COLUMNS + 4 * CANDIDATES;

/// Arena index of the root header.
const ROOT: usize = 0;

/// Sentinel for fields that have no meaning on a given node kind.
const UNUSED: usize = usize::MAX;

/// Exact-cover column index for the "cell `(r, c)` is filled" constraint.
fn cell_column(r: usize, c: usize) -> usize {
    9 * r + c
}

/// Exact-cover column index for the "row `r` has digit `d`" constraint.
fn row_digit_column(r: usize, d: usize) -> usize {
    81 + 9 * r + (d - 1)
}

/// Exact-cover column index for the "column `c` has digit `d`" constraint.
fn column_digit_column(c: usize, d: usize) -> usize {
    162 + 9 * c + (d - 1)
}

/// Exact-cover column index for the "box of `(r, c)` has digit `d`" constraint.
fn box_digit_column(r: usize, c: usize, d: usize) -> usize {
    let b = 3 * (r / 3) + c / 3;
    243 + 9 * b + (d - 1)
}

/// Encodes a placement `(r, c, d)` as a row identifier in `0..729`.
pub(crate) fn encode_placement(r: usize, c: usize, d: usize) -> usize {
    81 * r + 9 * c + (d - 1)
}

/// Decodes a row identifier back into its `(r, c, d)` placement.
#[expect(clippy::cast_possible_truncation)]
pub(crate) fn decode_placement(row_id: usize) -> (usize, usize, u8) {
    (row_id / 81, row_id % 81 / 9, (row_id % 9 + 1) as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    left: usize,
    right: usize,
    up: usize,
    down: usize,
    /// Column id (`0..324`) this node belongs to; `UNUSED` on the root.
    column: usize,
    /// Row identifier (`0..729`) for row nodes; `UNUSED` on headers.
    row: usize,
}

/// The dancing-links matrix for one board.
///
/// Built per solve call and dropped on return; nothing outlives the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DlxMatrix {
    nodes: Vec<Node>,
    /// Live row count per column, indexed by column id.
    sizes: [usize; COLUMNS],
}

impl DlxMatrix {
    /// Builds the matrix for `board`.
    ///
    /// Cells are visited row-major and digits ascending: an empty cell emits
    /// all nine candidate rows, a given cell emits only its own. The ordering
    /// is what makes the search deterministic. An internally inconsistent
    /// board still builds; the search will simply find no cover.
    pub(crate) fn new(board: &Board) -> Self {
        let mut nodes = Vec::with_capacity(MAX_NODES);
        nodes.push(Node {
            left: COLUMNS,
            right: 1,
            up: ROOT,
            down: ROOT,
            column: UNUSED,
            row: UNUSED,
        });
        for column in 0..COLUMNS {
            let index = column + 1;
            nodes.push(Node {
                left: index - 1,
                right: if column == COLUMNS - 1 { ROOT } else { index + 1 },
                up: index,
                down: index,
                column,
                row: UNUSED,
            });
        }

        let mut matrix = Self {
            nodes,
            sizes: [0; COLUMNS],
        };
        for r in 0..9 {
            for c in 0..9 {
                match board.get(r, c) {
                    0 => {
                        for d in 1..=9 {
                            matrix.add_candidate(r, c, d);
                        }
                    }
                    d => matrix.add_candidate(r, c, usize::from(d)),
                }
            }
        }
        matrix
    }

    /// Appends the four nodes of the candidate row `(r, c, d)`.
    ///
    /// Each node is inserted at the tail of its column (above the header) and
    /// the four are linked into a circular horizontal list.
    fn add_candidate(&mut self, r: usize, c: usize, d: usize) {
        let row = encode_placement(r, c, d);
        let columns = [
            cell_column(r, c),
            row_digit_column(r, d),
            column_digit_column(c, d),
            box_digit_column(r, c, d),
        ];
        let first = self.nodes.len();
        for (k, &column) in columns.iter().enumerate() {
            let index = first + k;
            let header = column + 1;
            let up = self.nodes[header].up;
            self.nodes.push(Node {
                left: if k == 0 { first + 3 } else { index - 1 },
                right: if k == 3 { first } else { index + 1 },
                up,
                down: header,
                column,
                row,
            });
            self.nodes[up].down = index;
            self.nodes[header].up = index;
            self.sizes[column] += 1;
        }
    }

    /// Removes `column` from the header list and unlinks every row that
    /// touches it from all other columns.
    pub(crate) fn cover(&mut self, column: usize) {
        let header = column + 1;
        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[right].left = left;
        self.nodes[left].right = right;

        let mut i = self.nodes[header].down;
        while i != header {
            let mut j = self.nodes[i].right;
            while j != i {
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[down].up = up;
                self.nodes[up].down = down;
                self.sizes[self.nodes[j].column] -= 1;
                j = self.nodes[j].right;
            }
            i = self.nodes[i].down;
        }
    }

    /// Exact inverse of [`DlxMatrix::cover`]: walks the rows upward and each
    /// row leftward, relinking nodes in the reverse of cover's unlink order,
    /// then restores the header. After an uncover the link topology and all
    /// column sizes match the state before the matching cover.
    pub(crate) fn uncover(&mut self, column: usize) {
        let header = column + 1;

        let mut i = self.nodes[header].up;
        while i != header {
            let mut j = self.nodes[i].left;
            while j != i {
                self.sizes[self.nodes[j].column] += 1;
                let (up, down) = (self.nodes[j].up, self.nodes[j].down);
                self.nodes[down].up = j;
                self.nodes[up].down = j;
                j = self.nodes[j].left;
            }
            i = self.nodes[i].up;
        }

        let (left, right) = (self.nodes[header].left, self.nodes[header].right);
        self.nodes[right].left = header;
        self.nodes[left].right = header;
    }

    /// Picks the uncovered column with the fewest live rows (minimum
    /// remaining values). Ties break to the leftmost column in the header
    /// list; a size of 0 or 1 ends the scan early since it cannot be beaten.
    ///
    /// Returns `None` when the header list is empty, i.e. every constraint
    /// is covered and the partial solution is complete.
    pub(crate) fn choose_column(&self) -> Option<usize> {
        let mut best = None;
        let mut best_size = usize::MAX;
        let mut index = self.nodes[ROOT].right;
        while index != ROOT {
            let column = self.nodes[index].column;
            let size = self.sizes[column];
            if size < best_size {
                best = Some(column);
                best_size = size;
                if size <= 1 {
                    break;
                }
            }
            index = self.nodes[index].right;
        }
        best
    }

    /// Returns the live row count of `column`.
    pub(crate) fn size(&self, column: usize) -> usize {
        self.sizes[column]
    }

    /// Returns the arena index of `column`'s header.
    pub(crate) fn header(&self, column: usize) -> usize {
        column + 1
    }

    /// Returns the column id of the row node at `index`.
    pub(crate) fn column_of(&self, index: usize) -> usize {
        self.nodes[index].column
    }

    /// Returns the row identifier of the row node at `index`.
    pub(crate) fn row_of(&self, index: usize) -> usize {
        self.nodes[index].row
    }

    pub(crate) fn down(&self, index: usize) -> usize {
        self.nodes[index].down
    }

    pub(crate) fn right(&self, index: usize) -> usize {
        self.nodes[index].right
    }

    pub(crate) fn left(&self, index: usize) -> usize {
        self.nodes[index].left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_encoding() {
        assert_eq!(cell_column(0, 0), 0);
        assert_eq!(cell_column(8, 8), 80);
        assert_eq!(row_digit_column(0, 1), 81);
        assert_eq!(row_digit_column(8, 9), 161);
        assert_eq!(column_digit_column(0, 1), 162);
        assert_eq!(column_digit_column(8, 9), 242);
        assert_eq!(box_digit_column(0, 0, 1), 243);
        assert_eq!(box_digit_column(8, 8, 9), 323);
        // (4, 4) lies in the center box
        assert_eq!(box_digit_column(4, 4, 1), 243 + 9 * 4);
    }

    #[test]
    fn test_placement_round_trip() {
        for r in 0..9 {
            for c in 0..9 {
                for d in 1..=9u8 {
                    let id = encode_placement(r, c, usize::from(d));
                    assert_eq!(decode_placement(id), (r, c, d));
                }
            }
        }
        assert_eq!(encode_placement(0, 0, 1), 0);
        assert_eq!(encode_placement(8, 8, 9), 728);
    }

    #[test]
    fn test_build_empty_board() {
        let matrix = DlxMatrix::new(&Board::new());
        // 729 candidate rows of four nodes each, plus root and headers
        assert_eq!(matrix.nodes.len(), MAX_NODES);
        // Every constraint starts with nine candidates
        for column in 0..COLUMNS {
            assert_eq!(matrix.size(column), 9);
        }
    }

    #[test]
    fn test_build_given_cell_emits_single_candidate() {
        let mut board = Board::new();
        board.set(0, 0, 5);
        let matrix = DlxMatrix::new(&board);

        // 80 empty cells emit nine candidates each; the given emits one
        assert_eq!(matrix.nodes.len(), 1 + COLUMNS + 4 * (80 * 9 + 1));
        assert_eq!(matrix.size(cell_column(0, 0)), 1);
        assert_eq!(matrix.size(row_digit_column(0, 5)), 1);
        assert_eq!(matrix.size(column_digit_column(0, 5)), 1);
        assert_eq!(matrix.size(box_digit_column(0, 0, 5)), 1);
        // An untouched cell keeps all nine candidates
        assert_eq!(matrix.size(cell_column(8, 8)), 9);
        // Digit 5 elsewhere in row 0 is still a candidate; only cell (0, 0)
        // stopped contributing
        assert_eq!(matrix.size(row_digit_column(0, 4)), 9);
    }

    #[test]
    fn test_column_lists_follow_insertion_order() {
        // Vertical insertion is at the tail, so walking a column downward
        // yields candidates in row-major, ascending-digit emission order.
        let matrix = DlxMatrix::new(&Board::new());
        let header = matrix.header(cell_column(0, 0));
        let mut index = matrix.down(header);
        let mut expected_digit = 1u8;
        while index != header {
            let (r, c, d) = decode_placement(matrix.row_of(index));
            assert_eq!((r, c), (0, 0));
            assert_eq!(d, expected_digit);
            expected_digit += 1;
            index = matrix.down(index);
        }
        assert_eq!(expected_digit, 10);
    }

    #[test]
    fn test_cover_uncover_round_trip() {
        let mut matrix = DlxMatrix::new(&Board::new());
        let snapshot = matrix.clone();

        for column in [0, 80, 81, 200, 243, 323] {
            matrix.cover(column);
            assert_ne!(matrix, snapshot);
            matrix.uncover(column);
            assert_eq!(matrix, snapshot, "column {column} did not restore");
        }

        // Nested cover/uncover in stack order also restores
        matrix.cover(0);
        matrix.cover(100);
        matrix.uncover(100);
        matrix.uncover(0);
        assert_eq!(matrix, snapshot);
    }

    #[test]
    fn test_cover_removes_column_from_header_list() {
        let mut matrix = DlxMatrix::new(&Board::new());
        matrix.cover(0);

        let mut index = matrix.nodes[ROOT].right;
        while index != ROOT {
            assert_ne!(matrix.nodes[index].column, 0);
            index = matrix.nodes[index].right;
        }

        // Rows through column 0 left their other columns as well
        assert_eq!(matrix.size(row_digit_column(0, 1)), 8);
        assert_eq!(matrix.size(box_digit_column(0, 0, 9)), 8);
    }

    #[test]
    fn test_choose_column_prefers_smallest_and_breaks_ties_leftmost() {
        let matrix = DlxMatrix::new(&Board::new());
        // All columns tie at nine; leftmost wins
        assert_eq!(matrix.choose_column(), Some(0));

        let mut board = Board::new();
        board.set(4, 4, 5);
        let matrix = DlxMatrix::new(&board);
        // The given cell's constraints have size 1 and beat everything
        let chosen = matrix.choose_column().unwrap();
        assert_eq!(matrix.size(chosen), 1);
    }
}
