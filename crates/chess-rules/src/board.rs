//! Board store: the piece grid plus position metadata.

use chess_core::{Color, Move, Piece, PieceKind, Placement, Square};
use std::fmt;

/// Which rook a castling move uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Column of the rook before castling.
    #[inline]
    pub const fn rook_col(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Column the rook lands on (the square the king passes over).
    #[inline]
    pub const fn rook_target_col(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    /// Columns strictly between the king and the rook.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[1, 2, 3],
        }
    }

    /// Side of a king move, if it spans two columns.
    #[inline]
    pub const fn of_king_move(from: Square, to: Square) -> Option<Self> {
        if from.row() != to.row() {
            return None;
        }
        match to.col() as i8 - from.col() as i8 {
            2 => Some(CastleSide::King),
            -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const LIGHT_KINGSIDE: u8 = 0b0001;
    pub const LIGHT_QUEENSIDE: u8 = 0b0010;
    pub const DARK_KINGSIDE: u8 = 0b0100;
    pub const DARK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::Light, CastleSide::King) => Self::LIGHT_KINGSIDE,
            (Color::Light, CastleSide::Queen) => Self::LIGHT_QUEENSIDE,
            (Color::Dark, CastleSide::King) => Self::DARK_KINGSIDE,
            (Color::Dark, CastleSide::Queen) => Self::DARK_QUEENSIDE,
        }
    }

    /// Returns true if `color` still holds the right to castle on `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side)) != 0
    }

    /// Revokes one flag. Rights are never granted back.
    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::flag(color, side);
    }

    /// Revokes both flags of a color.
    #[inline]
    pub fn revoke_color(&mut self, color: Color) {
        self.revoke(color, CastleSide::King);
        self.revoke(color, CastleSide::Queen);
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Parses the normalized FEN castling letters (`KQkq` subset).
    pub fn from_fen_letters(letters: &str) -> Self {
        let mut rights = CastlingRights::NONE;
        for c in letters.chars() {
            rights.0 |= match c {
                'K' => Self::LIGHT_KINGSIDE,
                'Q' => Self::LIGHT_QUEENSIDE,
                'k' => Self::DARK_KINGSIDE,
                'q' => Self::DARK_QUEENSIDE,
                _ => 0,
            };
        }
        rights
    }

    /// FEN castling letters in `KQkq` order, empty when no rights remain.
    pub fn to_fen_letters(self) -> String {
        [
            (Color::Light, CastleSide::King, 'K'),
            (Color::Light, CastleSide::Queen, 'Q'),
            (Color::Dark, CastleSide::King, 'k'),
            (Color::Dark, CastleSide::Queen, 'q'),
        ]
        .into_iter()
        .filter(|&(color, side, _)| self.has(color, side))
        .map(|(_, _, c)| c)
        .collect()
    }
}

/// What [`Board::relocate`] did, for the bookkeeping that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    /// The piece that left the origin square, before any promotion.
    pub moved: Piece,
    /// A piece removed by the move, whether on the destination or en passant.
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
}

/// A complete chess position: 8x8 grid of optional pieces plus metadata.
///
/// Each slot holds at most one piece. Boards are plain values; cloning one
/// yields an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: Placement,

    /// The side to move.
    pub active_color: Color,

    pub castling: CastlingRights,

    /// Square passed over by a pawn's double step on the previous move.
    pub en_passant: Option<Square>,

    /// Moves since the last capture or pawn move.
    pub halfmove_clock: u32,

    /// Starts at 1 and increments after Dark moves.
    pub fullmove_number: u32,
}

impl Board {
    /// Creates an empty board with Light to move.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            active_color: Color::Light,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates a board from a placement grid and default metadata.
    pub fn from_placement(squares: Placement) -> Self {
        Board {
            squares,
            ..Board::empty()
        }
    }

    /// The placement grid, indexed `[row][col]`.
    #[inline]
    pub fn placement(&self) -> &Placement {
        &self.squares
    }

    /// Returns the piece at `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Puts `piece` on `sq`, returning whatever stood there before.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].replace(piece)
    }

    /// Clears `sq`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Iterates over every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, rank)| {
            rank.iter().enumerate().filter_map(move |(col, slot)| {
                let piece = (*slot)?;
                Some((Square::new(row as u8, col as u8)?, piece))
            })
        })
    }

    /// Iterates over the pieces of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Returns the square of `color`'s king, or `None` if it has none.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Moves pieces for `mv` without touching any metadata.
    ///
    /// Handles the rook of a castling move, the pawn taken en passant,
    /// captures on the destination, and promotion. Returns `None` when the
    /// origin is empty. No legality check is made: this is the primitive
    /// shared by move simulation and move execution.
    pub fn relocate(&mut self, mv: Move) -> Option<Relocation> {
        let (from, to) = (mv.from(), mv.to());
        let moved = self.remove(from)?;
        let mut relocation = Relocation {
            moved,
            captured: None,
            castle: None,
            en_passant: false,
        };

        match moved.kind {
            PieceKind::King => {
                if let Some(side) = CastleSide::of_king_move(from, to) {
                    let row = from.row();
                    let rook_from = Square::new(row, side.rook_col())?;
                    let rook_to = Square::new(row, side.rook_target_col())?;
                    if let Some(rook) = self.remove(rook_from) {
                        self.place(rook_to, rook);
                    }
                    relocation.castle = Some(side);
                }
            }
            PieceKind::Pawn => {
                if Some(to) == self.en_passant && from.col() != to.col() && self.is_empty_at(to) {
                    // The passed pawn stands beside the origin, behind the target.
                    let victim = Square::new(from.row(), to.col())?;
                    let passed_pawn = Piece::new(PieceKind::Pawn, moved.color.opposite());
                    if self.piece_at(victim) == Some(passed_pawn) {
                        relocation.captured = self.remove(victim);
                        relocation.en_passant = true;
                    }
                }
            }
            _ => {}
        }

        let landed = if moved.kind == PieceKind::Pawn && to.row() == moved.color.promotion_row() {
            Piece::new(mv.promotion_kind(), moved.color)
        } else {
            moved
        };
        if let Some(captured) = self.place(to, landed) {
            relocation.captured = Some(captured);
        }

        Some(relocation)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for slot in rank {
                match slot {
                    Some(piece) => write!(f, "{} ", piece.to_fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{} to move", self.active_color)
    }
}
