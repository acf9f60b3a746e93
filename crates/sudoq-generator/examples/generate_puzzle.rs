//! Example demonstrating seeded Sudoku puzzle generation.
//!
//! # Usage
//!
//! Generate a puzzle at the default level from a random seed:
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty level (1 = easiest, 10 = hardest):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --level 10
//! ```
//!
//! Reproduce a previous run from its printed seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Or derive the seed from a memorable phrase:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --phrase "tuesday puzzle"
//! ```

use std::process;

use clap::Parser;
use sudoq_generator::{PuzzleGenerator, PuzzleSeed, clue_target};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty level, clamped to 1-10.
    #[arg(short, long, default_value_t = 5)]
    level: u8,

    /// Seed as 64 hex characters; conflicts with --phrase.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a text phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,
}

fn main() {
    let args = Args::parse();

    let seed = match (&args.seed, &args.phrase) {
        (Some(hex), _) => match hex.parse::<PuzzleSeed>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed: {err}");
                process::exit(2);
            }
        },
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };

    let generator = PuzzleGenerator::new();
    let puzzle = match generator.generate_with_seed(args.level, seed) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("generation failed: {err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Level {} ({} clues):", args.level.clamp(1, 10), clue_target(args.level));
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
