//! Random Sudoku puzzle generation for the sudoq engine.
//!
//! Generation runs in two phases. Phase A builds a complete solved grid by
//! randomised backtracking: cells are visited row-major, and at each empty
//! cell the digits 1-9 are shuffled and tried in order. Phase B erases cells
//! in a shuffled order until only the target number of clues remains. The
//! target is derived from a difficulty level 1-10 (level 1 leaves 53 clues,
//! level 10 leaves 26).
//!
//! Generated puzzles are *not* guaranteed to have a unique solution; the
//! shipped solution is whatever the exact-cover solver finds first, which is
//! deterministic for a given puzzle.
//!
//! All randomness flows from a [`PuzzleSeed`], so generation is fully
//! reproducible: the same `(level, seed)` pair always yields the same puzzle.
//!
//! # Examples
//!
//! ```
//! use sudoq_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let generator = PuzzleGenerator::new();
//! let seed = PuzzleSeed::from_phrase("sudoq example");
//! let puzzle = generator.generate_with_seed(5, seed)?;
//!
//! assert_eq!(puzzle.problem.filled_count(), 41); // 56 - 3 * 5
//! assert!(puzzle.solution.is_solved());
//! # Ok::<(), sudoq_generator::GeneratorError>(())
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
