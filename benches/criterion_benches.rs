#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};

use n_puzzle_solver::config::{Heuristic, Limits};
use n_puzzle_solver::{LoadPuzzle, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_moderate(c: &mut Criterion) {
    // 26 moves
    bench_puzzle(c, "puzzles/moderate.txt", 20);
}

#[allow(unused)]
fn bench_4x4(c: &mut Criterion) {
    // 22 moves, hamming is slow here
    bench_puzzle(c, "puzzles/4x4-deep.txt", 10);
}

fn bench_puzzle(c: &mut Criterion, puzzle_path: &str, samples: usize) {
    let start = puzzle_path.load_puzzle().unwrap();
    let limits = Limits::unlimited();

    let mut group = c.benchmark_group(puzzle_path);
    group.sample_size(samples);
    for &heuristic in &Heuristic::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(heuristic),
            &heuristic,
            |b, &heuristic| {
                b.iter(|| criterion::black_box(start.solve(criterion::black_box(heuristic), &limits)))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_moderate, bench_4x4);
criterion_main!(benches);
