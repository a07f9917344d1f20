//! Search benchmarks
//!
//! Fixed-depth minimax against single-pass alpha-beta on the same midgame
//! boards, plus move generation and evaluation costs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use isolation_search::core::{GameRng, SearchConfig};
use isolation_search::eval::{Evaluator, ImprovedScore, LookaheadScore};
use isolation_search::games::isolation::Board;
use isolation_search::rules::GameState;
use isolation_search::search::{AlphaBetaSearcher, MinimaxSearcher, NoDeadline};

fn midgame() -> Board {
    let mut rng = GameRng::new(2024);
    Board::random_opening(7, 7, &mut rng)
        .expect("7x7 is a valid board")
        .random_playout(6, &mut rng)
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = midgame();

    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| black_box(board.legal_moves(board.active_player())))
    });
}

fn bench_evaluators(c: &mut Criterion) {
    let board = midgame();
    let player = board.active_player();

    c.bench_function("improved_score", |b| {
        b.iter(|| black_box(ImprovedScore.evaluate(&board, player)))
    });
    c.bench_function("lookahead_score", |b| {
        b.iter(|| black_box(LookaheadScore.evaluate(&board, player)))
    });
}

fn bench_minimax(c: &mut Criterion) {
    let board = midgame();
    let mut searcher = MinimaxSearcher::new(ImprovedScore, SearchConfig::default()).unwrap();

    c.bench_function("minimax_depth_3", |b| {
        b.iter(|| black_box(searcher.decide(&board, 3, &NoDeadline)))
    });
}

fn bench_alphabeta(c: &mut Criterion) {
    let board = midgame();
    let mut searcher = AlphaBetaSearcher::new(ImprovedScore, SearchConfig::default()).unwrap();

    c.bench_function("alphabeta_depth_3", |b| {
        b.iter(|| black_box(searcher.alphabeta(&board, 3, &NoDeadline)))
    });

    let config = SearchConfig::default().with_max_depth(5);
    let mut deepening = AlphaBetaSearcher::new(ImprovedScore, config).unwrap();
    c.bench_function("iterative_deepening_to_5", |b| {
        b.iter(|| black_box(deepening.decide(&board, &NoDeadline)))
    });
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_evaluators,
    bench_minimax,
    bench_alphabeta,
);
criterion_main!(benches);
