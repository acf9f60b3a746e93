use rand::{Rng, seq::IndexedRandom as _};
use sudoq_core::{Board, ClueMask};
use sudoq_generator::GeneratedPuzzle;

use crate::SaveData;

/// Number of illegal attempts that end the game.
pub const MAX_STRIKES: u8 = 3;

/// Lifecycle state of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameStatus {
    /// The puzzle is still being worked on.
    InProgress,
    /// The board was completed and passed rule validation.
    Won,
    /// The strike limit was reached.
    Lost,
}

/// Error returned by game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The game has already been won or lost.
    #[display("the game is over")]
    GameOver,
    /// The targeted cell is a clue and cannot be changed.
    #[display("cell ({row}, {col}) is part of the puzzle and cannot be changed")]
    FixedCell {
        /// Row of the rejected cell.
        row: usize,
        /// Column of the rejected cell.
        col: usize,
    },
    /// The placement would duplicate a digit in a row, column, or box.
    #[display("placing {digit} at ({row}, {col}) violates the one-per-unit rule")]
    RuleViolation {
        /// Row of the rejected placement.
        row: usize,
        /// Column of the rejected placement.
        col: usize,
        /// The rejected digit.
        digit: u8,
    },
    /// No empty cell is left to reveal.
    #[display("no empty cell is available for a hint")]
    NoHint,
}

/// A Sudoku game session.
///
/// Wraps a generated puzzle with the contracts the core leaves to the
/// embedder: clue cells are immutable, rule-violating placements are
/// rejected, and each rejection of either kind counts a strike. Reaching
/// [`MAX_STRIKES`] loses the game; completing the board validly wins it.
///
/// # Examples
///
/// ```
/// use sudoq_game::{Game, GameError};
/// use sudoq_generator::{PuzzleGenerator, PuzzleSeed};
///
/// let puzzle = PuzzleGenerator::new()
///     .generate_with_seed(1, PuzzleSeed::from_phrase("doc game"))?;
/// let mut game = Game::new(puzzle);
///
/// // Find an empty cell and fill it from the solution
/// let (r, c) = (0..81)
///     .map(|i| (i / 9, i % 9))
///     .find(|&(r, c)| game.board().get(r, c) == 0)
///     .unwrap();
/// let digit = game.solution().get(r, c);
/// game.place(r, c, digit)?;
/// assert_eq!(game.board().get(r, c), digit);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Board,
    fixed: ClueMask,
    original: Board,
    solution: Board,
    strikes: u8,
    status: GameStatus,
}

impl Game {
    /// Creates a session from a generated puzzle.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self {
            board: puzzle.problem,
            fixed: puzzle.fixed,
            original: puzzle.problem,
            solution: puzzle.solution,
            strikes: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Restores a session from a save record.
    ///
    /// The record is taken verbatim. Strikes are not persisted and restart
    /// at zero; the status is recomputed from the current board.
    #[must_use]
    pub fn from_save(data: &SaveData) -> Self {
        let status = if data.board.is_complete() && data.board.is_solved() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        };
        Self {
            board: data.board,
            fixed: data.fixed,
            original: data.original,
            solution: data.solution,
            strikes: 0,
            status,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the clue mask of the original puzzle.
    #[must_use]
    pub const fn fixed(&self) -> &ClueMask {
        &self.fixed
    }

    /// Returns the puzzle as originally given.
    #[must_use]
    pub const fn original(&self) -> &Board {
        &self.original
    }

    /// Returns the stored solution.
    #[must_use]
    pub const fn solution(&self) -> &Board {
        &self.solution
    }

    /// Returns the session status.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the number of strikes registered so far.
    #[must_use]
    pub const fn strikes(&self) -> u8 {
        self.strikes
    }

    /// Returns the number of empty cells left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        81 - self.board.filled_count()
    }

    /// Places `digit` at `(r, c)`.
    ///
    /// A rule-valid placement that completes the board wins the game.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] when the session is already decided (no
    ///   strike).
    /// - [`GameError::FixedCell`] when `(r, c)` is a clue (counts a strike).
    /// - [`GameError::RuleViolation`] when `digit` would duplicate within a
    ///   unit (counts a strike). The board is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is not in `0..9`, or `digit` not in `1..=9`.
    pub fn place(&mut self, r: usize, c: usize, digit: u8) -> Result<(), GameError> {
        assert!((1..=9).contains(&digit), "digit must be 1-9, got {digit}");
        self.check_in_progress()?;
        self.check_not_fixed(r, c)?;
        if !self.board.is_safe(r, c, digit) {
            self.strike();
            return Err(GameError::RuleViolation { row: r, col: c, digit });
        }

        self.board.set(r, c, digit);
        if self.board.is_complete() && self.board.is_solved() {
            self.status = GameStatus::Won;
        }
        Ok(())
    }

    /// Empties the cell at `(r, c)`.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] when the session is already decided.
    /// - [`GameError::FixedCell`] when `(r, c)` is a clue (counts a strike).
    pub fn clear(&mut self, r: usize, c: usize) -> Result<(), GameError> {
        self.check_in_progress()?;
        self.check_not_fixed(r, c)?;
        self.board.set(r, c, 0);
        Ok(())
    }

    /// Reveals a random empty cell from the stored solution.
    ///
    /// Returns the revealed `(row, column, digit)`. A hint that completes
    /// the board wins the game.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] when the session is already decided.
    /// - [`GameError::NoHint`] when no empty cell remains.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(usize, usize, u8), GameError> {
        self.check_in_progress()?;

        let empty: Vec<(usize, usize)> = (0..81)
            .map(|i| (i / 9, i % 9))
            .filter(|&(r, c)| self.board.get(r, c) == 0)
            .collect();
        let &(r, c) = empty.choose(rng).ok_or(GameError::NoHint)?;

        let digit = self.solution.get(r, c);
        self.board.set(r, c, digit);
        if self.board.is_complete() && self.board.is_solved() {
            self.status = GameStatus::Won;
        }
        Ok((r, c, digit))
    }

    /// Restores the original puzzle and clears strikes.
    pub fn reset(&mut self) {
        self.board = self.original;
        self.strikes = 0;
        self.status = GameStatus::InProgress;
    }

    /// Builds a save record of the current session.
    #[must_use]
    pub const fn to_save_data(&self) -> SaveData {
        SaveData {
            board: self.board,
            fixed: self.fixed,
            original: self.original,
            solution: self.solution,
        }
    }

    fn check_in_progress(&self) -> Result<(), GameError> {
        if self.status.is_in_progress() {
            Ok(())
        } else {
            Err(GameError::GameOver)
        }
    }

    fn check_not_fixed(&mut self, r: usize, c: usize) -> Result<(), GameError> {
        if self.fixed.is_fixed(r, c) {
            self.strike();
            return Err(GameError::FixedCell { row: r, col: c });
        }
        Ok(())
    }

    fn strike(&mut self) {
        self.strikes += 1;
        if self.strikes >= MAX_STRIKES {
            self.status = GameStatus::Lost;
        }
    }
}
