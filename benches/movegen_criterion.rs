use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quince_chess::{chess_board::ChessBoard, piece_team::PieceTeam};

fn bench_rules_core(c: &mut Criterion) {
    let board = ChessBoard::new();

    // Correctness guard before benchmarking.
    assert_eq!(board.get_possible_moves(PieceTeam::White).len(), 20);
    assert_eq!(board.get_possible_moves(PieceTeam::Black).len(), 20);
    assert!(!board
        .is_check(PieceTeam::White)
        .expect("simulating generated moves should not fail"));

    let mut group = c.benchmark_group("rules_core");

    group.bench_function("startpos_movegen", |b| {
        b.iter(|| {
            let moves = black_box(&board).get_possible_moves(PieceTeam::White);
            black_box(moves.len())
        });
    });

    group.bench_function("startpos_is_check", |b| {
        b.iter(|| {
            black_box(&board)
                .is_check(PieceTeam::White)
                .expect("simulating generated moves should not fail")
        });
    });

    group.finish();
}

criterion_group!(rules_core_benches, bench_rules_core);
criterion_main!(rules_core_benches);
