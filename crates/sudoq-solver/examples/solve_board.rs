//! Example demonstrating the dancing-links solver on a single grid.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_board -- \
//!     530070000600195000098000060800060003400803001700020006060000280000419005000080079
//! ```
//!
//! The grid is an 81-character row-major string; `0`, `.`, and `_` mark
//! empty cells. Exits with status 1 when the grid has no solution.

use std::process;

use clap::Parser;
use sudoq_core::Board;
use sudoq_solver::solve;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character row-major grid; 0, '.', or '_' for empty cells.
    grid: String,
}

fn main() {
    let args = Args::parse();

    let board = match args.grid.parse::<Board>() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid grid: {err}");
            process::exit(2);
        }
    };

    match solve(&board) {
        Ok(solution) => {
            println!("Puzzle:");
            println!("  {board}");
            println!("Solution:");
            println!("  {solution}");
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
