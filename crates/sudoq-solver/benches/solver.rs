//! Benchmarks for the dancing-links solver.
//!
//! Measures end-to-end `solve` (matrix build + search + extraction) on three
//! fixtures: an easy newspaper-grade puzzle, the AI-Escargot hard instance,
//! and the empty board (maximum branching).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sudoq_core::Board;
use sudoq_solver::solve;

const FIXTURES: [(&str, &str); 3] = [
    (
        "easy",
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
    ),
    (
        "ai_escargot",
        "100007090030020008009600500005300900010080002600004000300000010040000007007000300",
    ),
    (
        "empty",
        "000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    ),
];

fn bench_solve(c: &mut Criterion) {
    for (name, grid) in FIXTURES {
        let board: Board = grid.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("solve", name), &board, |b, board| {
            b.iter(|| solve(hint::black_box(board)));
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
