//! Property tests over random legal games from the start position.

use chess_core::{Move, PieceKind};
use chess_rules::{decode, encode, is_king_attacked, legal_moves, Board};
use proptest::prelude::*;

/// Plays one move per choice, picking among the legal moves by index.
/// Stops early when the side to move has no legal move.
fn random_game(choices: &[u16], mut visit: impl FnMut(&Board, Move, &Board)) {
    let mut board = Board::startpos();
    for &choice in choices {
        let moves: Vec<Move> = legal_moves(&board).moves().collect();
        if moves.is_empty() {
            break;
        }
        let mv = moves[choice as usize % moves.len()];
        let next = board.after(mv).expect("generated move is legal");
        visit(&board, mv, &next);
        board = next;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn fen_roundtrip_along_random_games(choices in prop::collection::vec(any::<u16>(), 0..60)) {
        random_game(&choices, |_, _, next| {
            let decoded = decode(&encode(next)).unwrap();
            assert_eq!(&decoded, next);
        });
    }

    #[test]
    fn legal_moves_never_leave_own_king_attacked(choices in prop::collection::vec(any::<u16>(), 0..60)) {
        random_game(&choices, |before, _, next| {
            assert!(!is_king_attacked(next, before.active_color));
        });
    }

    #[test]
    fn en_passant_target_only_after_double_step(choices in prop::collection::vec(any::<u16>(), 0..60)) {
        random_game(&choices, |before, mv, next| {
            let pawn = before.piece_at(mv.from()).map(|p| p.kind) == Some(PieceKind::Pawn);
            let double = pawn && mv.from().row().abs_diff(mv.to().row()) == 2;
            assert_eq!(next.en_passant.is_some(), double);
        });
    }

    #[test]
    fn castling_rights_are_never_regained(choices in prop::collection::vec(any::<u16>(), 0..60)) {
        random_game(&choices, |before, _, next| {
            let gained = next.castling.raw() & !before.castling.raw();
            assert_eq!(gained, 0);
        });
    }

    #[test]
    fn pawns_reaching_far_row_become_queens(choices in prop::collection::vec(any::<u16>(), 0..60)) {
        random_game(&choices, |before, mv, next| {
            let Some(mover) = before.piece_at(mv.from()) else {
                panic!("legal move from an empty square");
            };
            if mover.kind == PieceKind::Pawn && mv.to().row() == mover.color.promotion_row() {
                let landed = next.piece_at(mv.to()).unwrap();
                assert_eq!(landed.kind, PieceKind::Queen);
                assert_eq!(landed.color, mover.color);
            }
        });
    }

    #[test]
    fn counters_follow_the_move(choices in prop::collection::vec(any::<u16>(), 0..60)) {
        random_game(&choices, |before, _, next| {
            assert_eq!(next.active_color, before.active_color.opposite());
            let expected = before.fullmove_number
                + u32::from(before.active_color == chess_core::Color::Dark);
            assert_eq!(next.fullmove_number, expected);
        });
    }
}
