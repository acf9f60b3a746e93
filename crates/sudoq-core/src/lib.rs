//! Core board primitives for the sudoq engine.
//!
//! This crate provides the fundamental grid types shared by the solver,
//! generator, and game crates:
//!
//! - [`Board`]: a 9×9 grid of cells holding digits 1-9 or 0 for empty, with
//!   the rule predicates [`Board::is_safe`], [`Board::is_complete`], and
//!   [`Board::is_solved`].
//! - [`ClueMask`]: a parallel 9×9 boolean mask marking the cells that were
//!   present in the initial puzzle (the "givens").
//!
//! Boards parse from and display as 81-character row-major strings, which is
//! the conventional one-line Sudoku exchange format:
//!
//! ```
//! use sudoq_core::Board;
//!
//! let board: Board =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()?;
//! assert_eq!(board.get(0, 0), 5);
//! assert!(board.is_safe(0, 2, 4));
//! assert!(!board.is_safe(0, 2, 5)); // 5 already in row 0 and box 0
//! # Ok::<(), sudoq_core::ParseBoardError>(())
//! ```

pub use self::{board::*, clue_mask::*};

mod board;
mod clue_mask;
