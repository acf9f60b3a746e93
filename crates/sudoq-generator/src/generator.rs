use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;
use sudoq_core::{Board, ClueMask};

use crate::PuzzleSeed;

/// Lowest accepted difficulty level.
pub const MIN_LEVEL: u8 = 1;
/// Highest accepted difficulty level.
pub const MAX_LEVEL: u8 = 10;

/// Maps a difficulty level to the number of clues left in the puzzle.
///
/// The level is clamped to `1..=10` first, then the clue count is
/// `clamp(56 - 3 * level, 24, 56)`: level 1 leaves 53 clues, level 10
/// leaves 26. Fewer clues generally means a harder puzzle, though no
/// uniqueness or technique analysis is performed.
///
/// # Examples
///
/// ```
/// use sudoq_generator::clue_target;
///
/// assert_eq!(clue_target(1), 53);
/// assert_eq!(clue_target(10), 26);
/// assert_eq!(clue_target(0), clue_target(1)); // clamped
/// assert_eq!(clue_target(99), clue_target(10)); // clamped
/// ```
#[must_use]
pub fn clue_target(level: u8) -> u8 {
    let level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    (56 - 3 * level).clamp(24, 56)
}

/// A generated puzzle together with its clue mask, solution, and seed.
///
/// `fixed` is the indicator mask of `problem`'s non-empty cells. `solution`
/// is the first solution the exact-cover solver finds for `problem`; since
/// no uniqueness check is performed, other solutions may exist, but this one
/// agrees with every clue. The seed reproduces the whole triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle as given, empty cells zeroed.
    pub problem: Board,
    /// Indicator mask of the problem's clue cells.
    pub fixed: ClueMask,
    /// A complete solution agreeing with every clue.
    pub solution: Board,
    /// The seed that produced this puzzle.
    pub seed: PuzzleSeed,
}

/// Error returned when puzzle generation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeneratorError {
    /// Backtracking never fails on an initially empty 9×9 grid, but the
    /// failure path is kept explicit rather than asserted away.
    #[display("backtracking fill did not produce a complete grid")]
    FillFailed,
}

/// Randomised Sudoku puzzle generator.
///
/// # Examples
///
/// ```
/// use sudoq_generator::{PuzzleGenerator, clue_target};
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate(7)?;
///
/// assert_eq!(
///     puzzle.problem.filled_count(),
///     usize::from(clue_target(7))
/// );
/// assert!(puzzle.solution.is_solved());
/// # Ok::<(), sudoq_generator::GeneratorError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PuzzleGenerator;

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        PuzzleGenerator
    }

    /// Generates a puzzle at `level` from a fresh random seed.
    ///
    /// The seed is recorded in the returned [`GeneratedPuzzle`] so the run
    /// can be reproduced with [`PuzzleGenerator::generate_with_seed`].
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::FillFailed`] if the backtracking fill fails
    /// (not reachable for a 9×9 grid).
    pub fn generate(&self, level: u8) -> Result<GeneratedPuzzle, GeneratorError> {
        self.generate_with_seed(level, PuzzleSeed::random())
    }

    /// Generates a puzzle at `level` from an explicit seed.
    ///
    /// Deterministic: the same `(level, seed)` pair always yields the same
    /// [`GeneratedPuzzle`]. The level is clamped to `1..=10`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::FillFailed`] if the backtracking fill fails
    /// (not reachable for a 9×9 grid).
    pub fn generate_with_seed(
        &self,
        level: u8,
        seed: PuzzleSeed,
    ) -> Result<GeneratedPuzzle, GeneratorError> {
        let mut rng = seed.rng();

        let mut full = Board::new();
        if !fill_from(&mut full, 0, &mut rng) {
            return Err(GeneratorError::FillFailed);
        }

        let mut problem = full;
        erase_to_clue_count(&mut problem, usize::from(clue_target(level)), &mut rng);
        let fixed = ClueMask::from_board(&problem);

        // The puzzle may admit several solutions; ship the one the solver
        // finds first so hints and checks are consistent with `solve`. The
        // fallback cannot trigger (the puzzle came from a solved grid) but
        // mirrors the erased grid's origin.
        let solution = sudoq_solver::solve(&problem).unwrap_or(full);

        Ok(GeneratedPuzzle {
            problem,
            fixed,
            solution,
            seed,
        })
    }
}

/// Phase A: fills the board from `cell` (row-major index) onward by trying
/// the digits 1-9 in shuffled order at each empty cell, backtracking when a
/// cell has no safe digit left.
fn fill_from(board: &mut Board, cell: usize, rng: &mut Pcg64) -> bool {
    if cell == 81 {
        return true;
    }
    let (r, c) = (cell / 9, cell % 9);
    if board.get(r, c) != 0 {
        return fill_from(board, cell + 1, rng);
    }

    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    for &d in &digits {
        if board.is_safe(r, c, d) {
            board.set(r, c, d);
            if fill_from(board, cell + 1, rng) {
                return true;
            }
            board.set(r, c, 0);
        }
    }
    false
}

/// Phase B: erases cells in a shuffled order, skipping already-empty cells,
/// until exactly `target` clues remain. No uniqueness check is made.
fn erase_to_clue_count(board: &mut Board, target: usize, rng: &mut Pcg64) {
    let mut order: Vec<usize> = (0..81).collect();
    order.shuffle(rng);

    let mut filled = board.filled_count();
    for &cell in &order {
        if filled <= target {
            break;
        }
        let (r, c) = (cell / 9, cell % 9);
        if board.get(r, c) == 0 {
            continue;
        }
        board.set(r, c, 0);
        filled -= 1;
    }
}
