//! Pseudo-legal move generation.
//!
//! Each piece kind has one rule body. The generators answer "where can this
//! piece go by its movement pattern" and ignore whether the move would leave
//! the mover's own king attacked; that is the legality filter's job.

pub mod perft;

use crate::board::{Board, CastleSide};
use crate::SquareSet;
use chess_core::{Color, PieceKind, Square};

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Returns every destination reachable by the piece on `from` under its
/// movement rules alone. An empty square yields the empty set.
pub fn pseudo_legal_moves(board: &Board, from: Square) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    let color = piece.color;
    match piece.kind {
        PieceKind::King => king_moves(board, from, color),
        PieceKind::Queen => slider_moves(board, from, color, &QUEEN_DIRECTIONS),
        PieceKind::Rook => slider_moves(board, from, color, &ROOK_DIRECTIONS),
        PieceKind::Bishop => slider_moves(board, from, color, &BISHOP_DIRECTIONS),
        PieceKind::Knight => step_moves(board, from, color, &KNIGHT_JUMPS),
        PieceKind::Pawn => pawn_moves(board, from, color),
    }
}

/// True if `color` may land on `sq`: empty or holding an enemy piece.
#[inline]
fn is_open_to(board: &Board, sq: Square, color: Color) -> bool {
    board.piece_at(sq).map_or(true, |p| p.color != color)
}

/// Single-step movers (knight jumps, king steps).
fn step_moves(board: &Board, from: Square, color: Color, offsets: &[(i8, i8)]) -> SquareSet {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| from.offset(dr, dc))
        .filter(|&to| is_open_to(board, to, color))
        .collect()
}

/// Ray casting for queens, rooks and bishops.
fn slider_moves(board: &Board, from: Square, color: Color, directions: &[(i8, i8)]) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    for &(dr, dc) in directions {
        let mut cursor = from.offset(dr, dc);
        while let Some(to) = cursor {
            match board.piece_at(to) {
                None => moves.insert(to),
                Some(blocker) => {
                    if blocker.color != color {
                        moves.insert(to);
                    }
                    break;
                }
            }
            cursor = to.offset(dr, dc);
        }
    }
    moves
}

fn king_moves(board: &Board, from: Square, color: Color) -> SquareSet {
    let mut moves = step_moves(board, from, color, &QUEEN_DIRECTIONS);
    moves |= castling_moves(board, from, color);
    moves
}

/// Castling destinations, without regard to check.
///
/// Needs the king on its home square, the flag, a rook of the same color in
/// the corner, and every square between them empty.
fn castling_moves(board: &Board, from: Square, color: Color) -> SquareSet {
    let row = color.home_row();
    let mut moves = SquareSet::EMPTY;
    if from.row() != row || from.col() != 4 {
        return moves;
    }

    for side in CastleSide::ALL {
        if !board.castling.has(color, side) {
            continue;
        }
        let rook_home = Square::new(row, side.rook_col());
        let rook_in_place = rook_home
            .and_then(|sq| board.piece_at(sq))
            .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
        let path_clear = side
            .between_cols()
            .iter()
            .filter_map(|&col| Square::new(row, col))
            .all(|sq| board.is_empty_at(sq));
        if rook_in_place && path_clear {
            if let Some(to) = Square::new(row, side.king_target_col()) {
                moves.insert(to);
            }
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, color: Color) -> SquareSet {
    let dir = color.pawn_direction();
    let mut moves = SquareSet::EMPTY;

    if let Some(one) = from.offset(dir, 0).filter(|&sq| board.is_empty_at(sq)) {
        moves.insert(one);
        if from.row() == color.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty_at(sq)) {
                moves.insert(two);
            }
        }
    }

    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        let enemy_there = board.piece_at(to).is_some_and(|p| p.color != color);
        if enemy_there || is_en_passant_target(board, to, color) {
            moves.insert(to);
        }
    }

    moves
}

/// The target only serves pawns of the side that did not just double-step:
/// it must lie four rows ahead of the capturer's pawn start row (rank 6 for
/// Light, rank 3 for Dark) with an enemy pawn standing directly behind it.
#[inline]
fn is_en_passant_target(board: &Board, to: Square, color: Color) -> bool {
    let capture_row = (color.pawn_start_row() as i8 + 4 * color.pawn_direction()) as u8;
    if board.en_passant != Some(to) || to.row() != capture_row {
        return false;
    }
    to.offset(-color.pawn_direction(), 0)
        .and_then(|victim| board.piece_at(victim))
        .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != color)
}
