//! Exact-cover Sudoku solver using dancing links (DLX).
//!
//! A Sudoku instance maps onto an exact-cover problem over 324 constraint
//! columns: 81 "cell is filled" constraints, and 81 each of "row has digit",
//! "column has digit", and "box has digit". Every candidate placement
//! `(row, column, digit)` is a matrix row touching exactly four columns.
//! [Algorithm X] with Knuth's dancing-links representation finds a set of
//! placements covering every constraint exactly once, which is precisely a
//! solved grid.
//!
//! The solver returns the first solution found and is fully deterministic:
//! equal input boards always produce equal output boards. Each call builds
//! its own matrix and releases it on return, so calls share no state and may
//! run from any number of threads with no coordination.
//!
//! [Algorithm X]: https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X
//!
//! # Examples
//!
//! ```
//! use sudoq_core::Board;
//! use sudoq_solver::solve;
//!
//! let puzzle: Board =
//!     "530070000600195000098000060800060003400803001700020006060000280000419005000080079"
//!         .parse()?;
//! let solution = solve(&puzzle)?;
//! assert!(solution.is_solved());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, search::*};

mod error;
mod matrix;
mod search;
