use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use tile_race::{Board, BoardInfo, Color, GameConfig, LudoGame, LudoPlayer, PlayerProfile};

const COLORS: [Color; 4] = [
    Color::rgb(220, 40, 40),
    Color::rgb(40, 40, 220),
    Color::rgb(40, 170, 40),
    Color::rgb(230, 200, 30),
];

fn info() -> BoardInfo {
    BoardInfo::new("Bench", "Generated board").unwrap()
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    for size in [5u32, 9, 12] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(Board::linear(info(), size, size).unwrap()))
        });
    }
    group.finish();
}

fn bench_cross(c: &mut Criterion) {
    let mut group = c.benchmark_group("cross");
    for size in [9u32, 15, 21] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(Board::cross(info(), size, &COLORS).unwrap()))
        });
    }
    group.finish();
}

fn bench_ludo_turns(c: &mut Criterion) {
    c.bench_function("ludo/100_turns", |b| {
        b.iter(|| {
            let board = Board::cross(info(), 15, &COLORS).unwrap();
            let players = COLORS
                .iter()
                .enumerate()
                .map(|(i, color)| {
                    LudoPlayer::new(PlayerProfile::new(format!("P{}", i), *color, true).unwrap())
                })
                .collect();
            let mut game = LudoGame::new(board, players, GameConfig::new().with_seed(42)).unwrap();
            for _ in 0..100 {
                black_box(game.perform_turn().unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_linear, bench_cross, bench_ludo_turns);
criterion_main!(benches);
