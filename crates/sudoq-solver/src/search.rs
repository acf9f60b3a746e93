use sudoq_core::Board;

use crate::{
    SolverError,
    matrix::{DlxMatrix, decode_placement},
};

/// Solves a Sudoku board by exact-cover search, returning the first solution.
///
/// Non-zero cells of the input are treated as givens; the returned board
/// agrees with the input on every given cell. The search is deterministic:
/// equal inputs produce equal outputs. Each call builds and drops its own
/// matrix, so concurrent calls share nothing.
///
/// # Errors
///
/// Returns [`SolverError::NoSolution`] when the board is unsatisfiable,
/// including when a given digit already violates the one-per-unit rule.
///
/// # Examples
///
/// ```
/// use sudoq_core::Board;
/// use sudoq_solver::{SolverError, solve};
///
/// let puzzle: Board =
///     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()
///         .unwrap();
/// let solution = solve(&puzzle)?;
/// assert!(solution.is_solved());
///
/// // Two 5s in row 0 make the board unsatisfiable
/// let broken: Board =
///     "550070000600195000098000060800060003400803001700020006060000280000419005000080079"
///         .parse()
///         .unwrap();
/// assert_eq!(solve(&broken), Err(SolverError::NoSolution));
/// # Ok::<(), SolverError>(())
/// ```
pub fn solve(board: &Board) -> Result<Board, SolverError> {
    let mut matrix = DlxMatrix::new(board);
    let mut chosen = Vec::with_capacity(81);
    if !search(&mut matrix, &mut chosen) {
        return Err(SolverError::NoSolution);
    }

    let mut solution = Board::new();
    for &row_id in &chosen {
        let (r, c, d) = decode_placement(row_id);
        solution.set(r, c, d);
    }
    Ok(solution)
}

/// Depth-first Algorithm X over the live matrix.
///
/// `chosen` is the stack of row identifiers forming the partial exact cover.
/// At most 81 levels deep for Sudoku: every level covers one cell constraint.
fn search(matrix: &mut DlxMatrix, chosen: &mut Vec<usize>) -> bool {
    let Some(column) = matrix.choose_column() else {
        // Header list is empty: every constraint is covered.
        return true;
    };
    if matrix.size(column) == 0 {
        return false;
    }

    matrix.cover(column);
    let header = matrix.header(column);
    let mut i = matrix.down(header);
    while i != header {
        chosen.push(matrix.row_of(i));
        let mut j = matrix.right(i);
        while j != i {
            matrix.cover(matrix.column_of(j));
            j = matrix.right(j);
        }

        if search(matrix, chosen) {
            return true;
        }

        let mut j = matrix.left(i);
        while j != i {
            matrix.uncover(matrix.column_of(j));
            j = matrix.left(j);
        }
        chosen.pop();
        i = matrix.down(i);
    }
    matrix.uncover(column);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY_PUZZLE: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    const EASY_SOLUTION: &str =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

    // AI-Escargot, one of the hardest known 9x9 instances
    const HARD_PUZZLE: &str =
        "100007090030020008009600500005300900010080002600004000300000010040000007007000300";
    const HARD_SOLUTION: &str =
        "162857493534129678789643521475312986913586742628794135356478219241935867897261354";

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_solves_easy_puzzle() {
        let solution = solve(&board(EASY_PUZZLE)).unwrap();
        assert_eq!(solution, board(EASY_SOLUTION));
    }

    #[test]
    fn test_solves_hard_puzzle() {
        let solution = solve(&board(HARD_PUZZLE)).unwrap();
        assert_eq!(solution, board(HARD_SOLUTION));
    }

    #[test]
    fn test_solved_input_returned_unchanged() {
        let solved = board(EASY_SOLUTION);
        assert!(solved.is_solved());
        assert_eq!(solve(&solved).unwrap(), solved);
    }

    #[test]
    fn test_unsolvable_duplicate_in_row() {
        // Two 5s in row 0
        let mut broken = board(EASY_PUZZLE);
        broken.set(0, 1, 5);
        assert!(!broken.is_solved());
        assert_eq!(solve(&broken), Err(SolverError::NoSolution));
    }

    #[test]
    fn test_unsolvable_dead_end() {
        // No duplicate among the givens, but cell (0, 8) ends up with no
        // legal digit: its row, column, and box together exclude all nine.
        let mut broken = Board::new();
        for (c, v) in (0..8).zip([1, 2, 3, 4, 5, 6, 7, 8]) {
            broken.set(0, c, v);
        }
        broken.set(1, 8, 9);
        assert_eq!(solve(&broken), Err(SolverError::NoSolution));
    }

    #[test]
    fn test_solution_is_sound() {
        let puzzle = board(EASY_PUZZLE);
        let solution = solve(&puzzle).unwrap();
        assert!(solution.is_complete());
        assert!(solution.is_solved());
        for r in 0..9 {
            for c in 0..9 {
                let given = puzzle.get(r, c);
                if given != 0 {
                    assert_eq!(solution.get(r, c), given, "given at ({r}, {c}) changed");
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let empty = Board::new();
        assert_eq!(solve(&empty).unwrap(), solve(&empty).unwrap());
        assert_eq!(
            solve(&board(HARD_PUZZLE)).unwrap(),
            solve(&board(HARD_PUZZLE)).unwrap()
        );
    }

    #[test]
    fn test_completes_any_erasure_of_a_solved_grid() {
        // Erase a diagonal band of cells; the solver must find some valid
        // completion that agrees with the remaining givens.
        let solved = board(EASY_SOLUTION);
        let mut puzzle = solved;
        for r in 0..9 {
            for c in 0..9 {
                if (r + c) % 3 != 0 {
                    puzzle.set(r, c, 0);
                }
            }
        }

        let solution = solve(&puzzle).unwrap();
        assert!(solution.is_solved());
        for r in 0..9 {
            for c in 0..9 {
                if puzzle.get(r, c) != 0 {
                    assert_eq!(solution.get(r, c), puzzle.get(r, c));
                }
            }
        }
    }

    #[test]
    fn test_empty_board_yields_some_solution() {
        let solution = solve(&Board::new()).unwrap();
        assert!(solution.is_solved());
    }
}
