//! Legality filter: pseudo-legal moves that do not leave the mover's king
//! attacked.
//!
//! Every candidate is tried on an independent copy of the board, so the
//! caller's board is never touched. This costs a full re-scan of the
//! opposing pieces per candidate, which is fine for interactive play.

use crate::board::{Board, CastleSide};
use crate::movegen::pseudo_legal_moves;
use crate::{ChessError, SquareSet};
use chess_core::{Color, Move, PieceKind, Square};
use std::collections::BTreeMap;

/// Legal destinations for each movable piece of the side to move.
///
/// Origins without any legal destination are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegalMoves(BTreeMap<Square, SquareSet>);

impl LegalMoves {
    /// Destinations for the piece on `from` (empty if it cannot move).
    pub fn get(&self, from: Square) -> SquareSet {
        self.0.get(&from).copied().unwrap_or_default()
    }

    /// Returns true if `from -> to` is legal.
    pub fn contains(&self, from: Square, to: Square) -> bool {
        self.get(from).contains(to)
    }

    /// Returns true if the side to move has no legal move.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of `(from, to)` pairs.
    pub fn count(&self) -> usize {
        self.0.values().map(|dests| dests.len()).sum()
    }

    /// Iterates over origins and their destination sets.
    pub fn iter(&self) -> impl Iterator<Item = (Square, SquareSet)> + '_ {
        self.0.iter().map(|(&from, &dests)| (from, dests))
    }

    /// Iterates over every legal move, with default promotion.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.iter()
            .flat_map(|(from, dests)| dests.into_iter().map(move |to| Move::new(from, to)))
    }
}

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

/// Computes every legal move of the side to move.
pub fn legal_moves(board: &Board) -> LegalMoves {
    let mut map = BTreeMap::new();
    for (from, _) in board.pieces_of(board.active_color) {
        let dests = legal_destinations(board, from);
        if !dests.is_empty() {
            map.insert(from, dests);
        }
    }
    LegalMoves(map)
}

/// Legal destinations of the piece on `from`.
///
/// Empty when the square is empty or holds a piece of the side not to move.
pub fn legal_destinations(board: &Board, from: Square) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    if piece.color != board.active_color {
        return SquareSet::EMPTY;
    }

    pseudo_legal_moves(board, from)
        .into_iter()
        .filter(|&to| {
            if piece.kind == PieceKind::King && CastleSide::of_king_move(from, to).is_some() {
                castle_is_safe(board, from, to, piece.color)
            } else {
                leaves_king_safe(board, Move::new(from, to), piece.color)
            }
        })
        .collect()
}

/// Returns true if `color`'s king is attacked. A side without a king is
/// never in check.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    match board.king_square(color) {
        Some(king) => is_attacked_by(board, king, color.opposite()),
        None => false,
    }
}

/// Returns true if the side to move is in check.
pub fn is_check(board: &Board) -> bool {
    is_king_attacked(board, board.active_color)
}

/// Classifies the position for the side to move.
///
/// Fails with [`ChessError::InvariantViolation`] when the side to move has
/// no king, since check cannot be decided then.
pub fn status(board: &Board) -> Result<GameStatus, ChessError> {
    if board.king_square(board.active_color).is_none() {
        return Err(ChessError::InvariantViolation(format!(
            "{} has no king",
            board.active_color
        )));
    }
    let in_check = is_check(board);
    let can_move = !legal_moves(board).is_empty();
    Ok(match (in_check, can_move) {
        (false, true) => GameStatus::Ongoing,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    })
}

/// Returns true if any piece of `by` could move onto the occupied square
/// `target`. Pawn pushes never land on occupied squares, so for an occupied
/// target this is exactly "attacked".
fn is_attacked_by(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces_of(by)
        .any(|(sq, _)| pseudo_legal_moves(board, sq).contains(target))
}

/// Simulates `mv` on a scratch copy and checks the mover's king.
fn leaves_king_safe(board: &Board, mv: Move, color: Color) -> bool {
    let mut scratch = board.clone();
    if scratch.relocate(mv).is_none() {
        return false;
    }
    !is_king_attacked(&scratch, color)
}

/// A castle must not start in, pass through, or end in check.
fn castle_is_safe(board: &Board, from: Square, to: Square, color: Color) -> bool {
    if is_attacked_by(board, from, color.opposite()) {
        return false;
    }
    let step = if to.col() > from.col() { 1 } else { -1 };
    let Some(transit) = from.offset(0, step) else {
        return false;
    };
    leaves_king_safe(board, Move::new(from, transit), color)
        && leaves_king_safe(board, Move::new(from, to), color)
}
