use mazerace::{Algorithm, MazeConfig, MazeGenerator, race, solve};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const SIZE: usize = 101;
const SEED: u64 = 17;

pub fn generate(c: &mut Criterion) {
    let generator = MazeGenerator::new(SIZE);
    c.bench_function("generate_101", |b| {
        b.iter(|| generator.generate_seeded(black_box(SEED)))
    });
}

pub fn solvers(c: &mut Criterion) {
    let grid = MazeConfig::new(SIZE).with_seed(SEED).generate();
    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("solve_{}", algorithm.name()), |b| {
            b.iter(|| solve(black_box(&grid), algorithm))
        });
    }
}

pub fn race_all(c: &mut Criterion) {
    let grid = MazeConfig::new(SIZE).with_seed(SEED).generate();
    c.bench_function("race_101", |b| {
        b.iter(|| race(black_box(&grid)))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(20); targets = generate, solvers, race_all}
criterion_main!(benches);
