//! Chess piece representation.

use crate::Color;
use std::fmt;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Lowercase letter used in FEN and UCI promotion suffixes.
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Parses a piece letter, ignoring case.
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true if a pawn may promote to this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A colored piece occupying a board slot.
///
/// Pieces are plain values: the board slot holding a piece is its square,
/// and promotion swaps the value in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Returns the FEN letter (uppercase for Light, lowercase for Dark).
    pub const fn to_fen_char(self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::Light => c.to_ascii_uppercase(),
            Color::Dark => c,
        }
    }

    /// Parses a FEN piece letter.
    pub const fn from_fen_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::Light
        } else {
            Color::Dark
        };
        match PieceKind::from_char(c) {
            Some(kind) => Some(Piece { kind, color }),
            None => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
