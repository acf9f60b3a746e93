//! Game session management for the sudoq engine.
//!
//! This crate is the boundary an embedder (a UI, a TUI, a bot) talks to. It
//! owns the contracts the core deliberately leaves to the caller:
//!
//! - [`Game`] enforces clue-cell immutability, validates placements against
//!   the one-per-unit rule, counts illegal attempts against a three-strikes
//!   limit, and offers hints from the stored solution.
//! - [`SaveData`] is the fixed-layout binary save record (magic `"SUD1"`,
//!   version 1, four 9×9 boards), with whole-file read/write helpers.
//!
//! Nothing here draws, listens for input, or blocks; every operation is a
//! synchronous state transition on plain values.
//!
//! # Examples
//!
//! ```
//! use sudoq_game::Game;
//! use sudoq_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let puzzle = PuzzleGenerator::new()
//!     .generate_with_seed(3, PuzzleSeed::from_phrase("doc"))?;
//! let mut game = Game::new(puzzle);
//!
//! assert!(game.status().is_in_progress());
//! assert_eq!(game.strikes(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{game::*, save::*};

mod game;
mod save;
