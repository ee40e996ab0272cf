//! Position codec: FEN text to [`Board`] and back.

use crate::board::{Board, CastlingRights};
use crate::ChessError;
use chess_core::FenFields;

/// Decodes a FEN string into a board.
///
/// Fails with [`ChessError::MalformedPosition`] when any of the six fields
/// is missing or invalid.
pub fn decode(fen: &str) -> Result<Board, ChessError> {
    let fields = FenFields::parse(fen)?;
    let mut board = Board::from_placement(fields.placement);
    board.active_color = fields.active_color;
    board.castling = CastlingRights::from_fen_letters(&fields.castling);
    board.en_passant = fields.en_passant;
    board.halfmove_clock = fields.halfmove_clock;
    board.fullmove_number = fields.fullmove_number;
    Ok(board)
}

/// Encodes a board as a FEN string. `decode(&encode(b))` equals `b`.
pub fn encode(board: &Board) -> String {
    FenFields {
        placement: *board.placement(),
        active_color: board.active_color,
        castling: board.castling.to_fen_letters(),
        en_passant: board.en_passant,
        halfmove_clock: board.halfmove_clock,
        fullmove_number: board.fullmove_number,
    }
    .to_fen()
}

impl Board {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        decode(FenFields::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        decode(fen)
    }

    /// Converts the board to a FEN string.
    pub fn to_fen(&self) -> String {
        encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, FenError, Piece, PieceKind, Square};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn startpos_fen_roundtrip() {
        let board = Board::startpos();
        assert_eq!(board.to_fen(), FenFields::STARTPOS);
    }

    #[test]
    fn custom_fen_roundtrip() {
        for fen in [
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w - - 0 1",
            "8/8/8/8/8/8/8/8 b Kq - 12 40",
        ] {
            let board = decode(fen).unwrap();
            assert_eq!(encode(&board), fen);
            assert_eq!(decode(&encode(&board)).unwrap(), board);
        }
    }

    #[test]
    fn decode_metadata() {
        let board = decode("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b Kq e3 5 9").unwrap();
        assert_eq!(board.active_color, Color::Dark);
        assert_eq!(board.castling.to_fen_letters(), "Kq");
        assert_eq!(board.en_passant, Some(sq("e3")));
        assert_eq!(board.halfmove_clock, 5);
        assert_eq!(board.fullmove_number, 9);
        assert_eq!(
            board.piece_at(sq("e4")),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
    }

    #[test]
    fn decode_rejects_malformed_input() {
        assert_eq!(
            decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"),
            Err(ChessError::MalformedPosition(FenError::InvalidFieldCount(4)))
        );
        assert!(matches!(
            decode("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ w KQkq - 0 1"),
            Err(ChessError::MalformedPosition(FenError::InvalidPiecePlacement(_)))
        ));
        assert!(matches!(decode(""), Err(ChessError::MalformedPosition(_))));
    }
}
