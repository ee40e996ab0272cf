//! Move execution: commits a validated move and updates the metadata.

use crate::board::{Board, CastleSide};
use crate::legality::legal_destinations;
use crate::ChessError;
use chess_core::{Color, Move, PieceKind, Square};

impl Board {
    /// Applies `mv` in place.
    ///
    /// Fails with [`ChessError::IllegalMove`] unless `mv.to()` is among the
    /// legal destinations of `mv.from()`, or when a promotion kind is given
    /// for a move that does not promote. On failure the board is unchanged.
    pub fn apply(&mut self, mv: Move) -> Result<(), ChessError> {
        validate(self, mv)?;
        commit(self, mv)
    }

    /// Returns the position after `mv`, leaving `self` unchanged.
    pub fn after(&self, mv: Move) -> Result<Board, ChessError> {
        let mut next = self.clone();
        next.apply(mv)?;
        Ok(next)
    }
}

fn validate(board: &Board, mv: Move) -> Result<(), ChessError> {
    if !legal_destinations(board, mv.from()).contains(mv.to()) {
        return Err(ChessError::IllegalMove(mv));
    }
    if let Some(kind) = mv.promotion() {
        let promotes = board
            .piece_at(mv.from())
            .is_some_and(|p| p.kind == PieceKind::Pawn && mv.to().row() == p.color.promotion_row());
        if !promotes || !kind.is_promotion_target() {
            return Err(ChessError::IllegalMove(mv));
        }
    }
    Ok(())
}

/// Commits a move already known to be legal.
pub(crate) fn commit(board: &mut Board, mv: Move) -> Result<(), ChessError> {
    let (from, to) = (mv.from(), mv.to());
    let mover = board.active_color;
    let enemy = mover.opposite();

    let relocation = board
        .relocate(mv)
        .ok_or_else(|| ChessError::InvariantViolation(format!("no piece on {}", from)))?;
    let moved = relocation.moved;

    match moved.kind {
        PieceKind::King => board.castling.revoke_color(mover),
        PieceKind::Rook if from.row() == mover.home_row() => {
            if let Some(side) = corner_side(from) {
                board.castling.revoke(mover, side);
            }
        }
        _ => {}
    }
    if relocation.captured.is_some() && to.row() == enemy.home_row() {
        if let Some(side) = corner_side(to) {
            board.castling.revoke(enemy, side);
        }
    }

    let double_step = moved.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2;
    board.en_passant = if double_step {
        Square::new((from.row() + to.row()) / 2, from.col())
    } else {
        None
    };

    if moved.kind == PieceKind::Pawn || relocation.captured.is_some() {
        board.halfmove_clock = 0;
    } else {
        board.halfmove_clock = board.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Dark {
        board.fullmove_number = board.fullmove_number.saturating_add(1);
    }

    board.active_color = enemy;
    Ok(())
}

/// Castling side whose rook starts on `sq`'s column, if it is a corner column.
fn corner_side(sq: Square) -> Option<CastleSide> {
    CastleSide::ALL
        .into_iter()
        .find(|side| side.rook_col() == sq.col())
}
