//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation pipeline (diagonal seeding, backtracking
//! completion, carving, freezing) per difficulty.
//!
//! # Test Data
//!
//! Uses three fixed seeds so runs are reproducible while still covering
//! multiple search shapes:
//!
//! - **`seed_0`**: `6f1d0c7a4a5b3e92817263544536271809f8e7d6c5b4a39281706f5e4d3c2b1a`
//! - **`seed_1`**: `00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff`
//! - **`seed_2`**: `deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sudokit_core::Difficulty;
use sudokit_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "6f1d0c7a4a5b3e92817263544536271809f8e7d6c5b4a39281706f5e4d3c2b1a",
    "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
    "deadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef",
];

fn bench_generator(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        let generator = PuzzleGenerator::new(9, difficulty);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generator_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets = bench_generator
);
criterion_main!(benches);
