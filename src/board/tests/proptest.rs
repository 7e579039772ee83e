//! Property-based tests using proptest.

use crate::board::{Board, BoardBuilder, Color, Piece, PieceKind, Square};
use proptest::prelude::*;

/// Strategy to generate a random game length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Strategy to pick one of the seed positions in `opening`
fn opening_strategy() -> impl Strategy<Value = usize> {
    0..4usize
}

/// Seed positions: the initial position plus ones where castling,
/// promotion and en passant are one move away.
fn opening(index: usize) -> (Board, Color) {
    match index {
        1 => (
            BoardBuilder::starting_position()
                .clear(Square(7, 1))
                .clear(Square(7, 2))
                .clear(Square(7, 3))
                .clear(Square(7, 5))
                .clear(Square(7, 6))
                .clear(Square(0, 1))
                .clear(Square(0, 2))
                .clear(Square(0, 3))
                .clear(Square(0, 5))
                .clear(Square(0, 6))
                .build(),
            Color::White,
        ),
        2 => (
            BoardBuilder::new()
                .piece(Square(7, 4), Piece::king(Color::White))
                .piece(Square(0, 7), Piece::king(Color::Black))
                .moved_piece(Square(1, 0), Piece::pawn(Color::White))
                .moved_piece(Square(1, 2), Piece::pawn(Color::White))
                .moved_piece(Square(6, 1), Piece::pawn(Color::Black))
                .moved_piece(Square(6, 7), Piece::pawn(Color::Black))
                .build(),
            Color::White,
        ),
        3 => (
            BoardBuilder::starting_position()
                .clear(Square(6, 4))
                .clear(Square(1, 3))
                .moved_piece(Square(3, 4), Piece::pawn(Color::White))
                .moved_piece(Square(3, 3), Piece::pawn(Color::Black))
                .en_passant(Square(3, 3))
                .clear(Square(1, 5))
                .moved_piece(Square(3, 5), Piece::pawn(Color::Black))
                .build(),
            Color::White,
        ),
        _ => (Board::new(), Color::White),
    }
}

/// Play up to `num_moves` random legal moves from seed position `start`,
/// alternating colors.
fn random_game(start: usize, seed: u64, num_moves: usize) -> (Board, Color) {
    use rand::prelude::*;

    let (mut board, mut side) = opening(start);
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..num_moves {
        let moves = board.all_legal_moves(side);
        if moves.is_empty() {
            break;
        }
        let idx = rng.gen_range(0..moves.len());
        board.play(&moves[idx]).expect("generated move rejected");
        side = side.opponent();
    }
    (board, side)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Property: applying a legal move empties its origin and fills its destination
    #[test]
    fn prop_apply_moves_piece(start in opening_strategy(), seed in seed_strategy(), num_moves in move_count_strategy()) {
        use rand::prelude::*;

        let (board, side) = random_game(start, seed, num_moves);
        let moves = board.all_legal_moves(side);
        prop_assume!(!moves.is_empty());

        let mut rng = StdRng::seed_from_u64(seed ^ 0x5EED);
        let mv = moves[rng.gen_range(0..moves.len())];
        let mut after = board.clone();
        after.play(&mv).expect("generated move rejected");

        prop_assert!(after.is_empty(mv.from()));
        let landed = after.piece_at(mv.to());
        prop_assert!(landed.is_some_and(|p| p.color() == side));
        prop_assert_eq!(after.last_move(), Some(mv));
    }

    /// Property: legal moves never leave the mover's king capturable
    #[test]
    fn prop_legal_moves_are_legal(start in opening_strategy(), seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, side) = random_game(start, seed, num_moves);
        for mv in board.all_legal_moves(side) {
            let mut after = board.clone();
            after.play(&mv).expect("generated move rejected");
            prop_assert!(!after.is_king_attacked(side),
                "Legal move left king in check: {:?}", mv);
        }
    }

    /// Property: at most one pawn is ever en-passant eligible
    #[test]
    fn prop_single_en_passant_pawn(start in opening_strategy(), seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_game(start, seed, num_moves);
        let eligible = Square::all()
            .filter(|sq| board.piece_at(*sq).is_some_and(|p| p.is_en_passant_eligible()))
            .count();
        prop_assert!(eligible <= 1);
    }

    /// Property: probing legality never mutates the probed board
    #[test]
    fn prop_probe_is_side_effect_free(start in opening_strategy(), seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, side) = random_game(start, seed, num_moves);
        let before = board.clone();
        for mv in board.all_legal_moves(side) {
            let _ = board.would_expose_own_king(&mv);
        }
        prop_assert_eq!(board, before);
    }

    /// Property: piece count never grows
    #[test]
    fn prop_piece_count_monotonic(start in opening_strategy(), seed in seed_strategy(), num_moves in move_count_strategy()) {
        let (board, _) = random_game(start, seed, num_moves);
        let total = board.pieces(Color::White).count() + board.pieces(Color::Black).count();
        prop_assert!(total <= 32);
        prop_assert!(board.find_king(Color::White).is_some());
        prop_assert!(board.find_king(Color::Black).is_some());
    }

    /// Property: castling moves the corner rook next to the king
    #[test]
    fn prop_castling_relocates_rook(seed in seed_strategy(), num_moves in 0..=6usize) {
        let (board, side) = random_game(1, seed, num_moves);
        for mv in board.all_legal_moves(side) {
            let is_king = board.piece_at(mv.from()).is_some_and(|p| p.is_king());
            if !is_king || !Board::is_castling_move(mv.from(), mv.to()) {
                continue;
            }
            let mut after = board.clone();
            after.play(&mv).expect("castling rejected");
            let rook_sq = Square(mv.to().row(), (mv.from().col() + mv.to().col()) / 2);
            prop_assert!(after.piece_at(rook_sq).is_some_and(|p| p.is_rook() && p.color() == side));
            prop_assert!(!after.is_king_attacked(side));
        }
    }

    /// Property: a pawn reaching a terminal row always becomes a queen
    #[test]
    fn prop_promotion_yields_queen(seed in seed_strategy(), num_moves in 0..=6usize) {
        let (board, side) = random_game(2, seed, num_moves);
        for mv in board.all_legal_moves(side) {
            let is_pawn = board.piece_at(mv.from()).is_some_and(|p| p.is_pawn());
            if !is_pawn || (mv.to().row() != 0 && mv.to().row() != 7) {
                continue;
            }
            let mut after = board.clone();
            after.play(&mv).expect("promotion rejected");
            let promoted = after.piece_at(mv.to());
            prop_assert!(promoted.is_some_and(|p| p.kind() == PieceKind::Queen && p.color() == side));
        }
    }
}
