use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sapper_core::{Board, BoardConfig, MineRatio, RandomBoardGenerator};
use std::hint::black_box;

const TIERS: [(usize, usize); 4] = [(9, 9), (30, 16), (100, 100), (255, 255)];

fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (width, height) in TIERS {
        let config = BoardConfig::new(width, height, MineRatio::DEFAULT).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &config,
            |b, &config| {
                let mut seed = 0;
                b.iter(|| {
                    seed += 1;
                    black_box(Board::generate(config, RandomBoardGenerator::new(seed)))
                });
            },
        );
    }
    group.finish();
}

fn flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    for (width, height) in TIERS {
        let size = (width as u8, height as u8);
        let empty = Board::from_mine_coords(size, &[]).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &empty,
            |b, empty| {
                b.iter_batched(
                    || empty.clone(),
                    |mut board| black_box(board.reveal((0, 0)).unwrap()),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, generate, flood_fill);
criterion_main!(benches);
