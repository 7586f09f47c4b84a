//! Win detection cost per board size.
//!
//! Each size gets a midgame position reached by seeded random play; the
//! bench then probes every legal move with `check_win`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tak_engine::{Board, TakGame};

fn midgame(size: usize, plies: usize) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
    let mut game = TakGame::with_size(size).expect("supported size");
    while game.board().ply() < plies {
        // Keep the position live: skip moves that would end the game.
        let board = game.board().clone();
        let moves: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|mv| board.check_win(mv).is_none())
            .collect();
        let Some(mv) = moves.choose(&mut rng) else {
            break;
        };
        game.play(mv);
    }
    game.board().clone()
}

fn bench_check_win(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_win");
    for size in 3..=8 {
        let board = midgame(size, size * size / 2);
        let moves = board.legal_moves();
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| {
                for mv in &moves {
                    black_box(board.check_win(black_box(mv)));
                }
            });
        });
    }
    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");
    for size in [5, 8] {
        let board = midgame(size, size * size / 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| black_box(board.legal_moves()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_check_win, bench_legal_moves);
criterion_main!(benches);
