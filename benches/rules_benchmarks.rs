//! Benchmarks for move generation and legality probing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Board, BoardBuilder, Color, Move, MoveFilter, Piece, Square};

fn middlegame() -> Board {
    BoardBuilder::starting_position()
        .clear(Square(6, 4))
        .clear(Square(1, 4))
        .clear(Square(7, 5))
        .clear(Square(7, 6))
        .moved_piece(Square(4, 4), Piece::pawn(Color::White))
        .moved_piece(Square(3, 4), Piece::pawn(Color::Black))
        .moved_piece(Square(4, 2), Piece::bishop(Color::White))
        .moved_piece(Square(5, 5), Piece::knight(Color::White))
        .build()
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    let middle = middlegame();
    for (name, board) in [("startpos", &startpos), ("middlegame", &middle)] {
        group.bench_with_input(BenchmarkId::new("legal", name), board, |b, board| {
            b.iter(|| black_box(board.all_legal_moves(Color::White)))
        });
        group.bench_with_input(BenchmarkId::new("pseudo", name), board, |b, board| {
            b.iter(|| {
                board
                    .pieces(Color::White)
                    .map(|(sq, _)| board.generate_moves(sq, MoveFilter::PseudoLegal).len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

fn bench_legality(c: &mut Criterion) {
    let mut group = c.benchmark_group("legality");

    let board = middlegame();
    let castle = Move::quiet(Square(7, 4), Square(7, 6));
    group.bench_function("would_expose_own_king", |b| {
        b.iter(|| black_box(board.would_expose_own_king(black_box(&castle))))
    });
    group.bench_function("is_king_attacked", |b| {
        b.iter(|| black_box(board.is_king_attacked(Color::White)))
    });

    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("play_first_moves", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut side = Color::White;
            for _ in 0..8 {
                let moves = board.all_legal_moves(side);
                let Some(mv) = moves.iter().next().copied() else {
                    break;
                };
                let _ = board.play(&mv);
                side = side.opponent();
            }
            black_box(board)
        })
    });
}

criterion_group!(benches, bench_movegen, bench_legality, bench_playout);
criterion_main!(benches);
