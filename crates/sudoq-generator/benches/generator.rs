//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation pipeline (backtracking fill, cell
//! erasure, and the solve that produces the shipped solution) at the easiest
//! and hardest difficulty levels.
//!
//! Three fixed seeds keep the measurements reproducible while still covering
//! multiple backtracking shapes.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudoq_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for level in [1u8, 10] {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_level_{level}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter(|| generator.generate_with_seed(level, hint::black_box(*seed)));
                },
            );
        }
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
