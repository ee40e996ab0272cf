//! Move representation.

use crate::{PieceKind, Square};
use std::fmt;

/// A move request: origin, destination, and an optional promotion kind.
///
/// Castling is a king move of two columns and en passant is a pawn move
/// onto the en passant target; neither needs a flag. A pawn reaching the
/// far row promotes to [`Move::promotion_kind`], which is a Queen unless
/// another kind was requested.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move with the default (Queen) promotion.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Returns this move with an explicit promotion kind.
    #[inline]
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Move {
            promotion: Some(kind),
            ..self
        }
    }

    /// Returns the source square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Returns the explicitly requested promotion kind, if any.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Returns the kind a promoting pawn becomes.
    #[inline]
    pub const fn promotion_kind(self) -> PieceKind {
        match self.promotion {
            Some(kind) => kind,
            None => PieceKind::Queen,
        }
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8n").
    pub fn to_uci(self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.to_char()),
            None => format!("{}{}", self.from, self.to),
        }
    }

    /// Parses a move from UCI notation.
    ///
    /// Only the shape is checked here; legality is decided against a board.
    pub fn from_uci(s: &str) -> Option<Self> {
        if !s.is_ascii() || s.len() < 4 || s.len() > 5 {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        let mv = Move::new(from, to);
        match s.chars().nth(4) {
            None => Some(mv),
            Some(c) => {
                let kind = PieceKind::from_char(c)?;
                kind.is_promotion_target().then(|| mv.with_promotion(kind))
            }
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_uci())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn move_accessors() {
        let m = Move::new(sq("e2"), sq("e4"));
        assert_eq!(m.from(), sq("e2"));
        assert_eq!(m.to(), sq("e4"));
        assert_eq!(m.promotion(), None);
        assert_eq!(m.promotion_kind(), PieceKind::Queen);
    }

    #[test]
    fn move_uci() {
        assert_eq!(Move::new(sq("e2"), sq("e4")).to_uci(), "e2e4");
        let promo = Move::new(sq("e7"), sq("e8")).with_promotion(PieceKind::Knight);
        assert_eq!(promo.to_uci(), "e7e8n");
        assert_eq!(promo.promotion_kind(), PieceKind::Knight);
    }

    #[test]
    fn move_from_uci() {
        let m = Move::from_uci("e2e4").unwrap();
        assert_eq!(m.from().to_algebraic(), "e2");
        assert_eq!(m.to().to_algebraic(), "e4");

        let promo = Move::from_uci("a2a1R").unwrap();
        assert_eq!(promo.promotion(), Some(PieceKind::Rook));
    }

    #[test]
    fn move_from_uci_rejects_bad_input() {
        assert!(Move::from_uci("e2").is_none());
        assert!(Move::from_uci("e2e").is_none());
        assert!(Move::from_uci("e2e4qq").is_none());
        assert!(Move::from_uci("e2e9").is_none());
        assert!(Move::from_uci("e7e8k").is_none());
        assert!(Move::from_uci("e7e8p").is_none());
        assert!(Move::from_uci("e7e8x").is_none());
        assert!(Move::from_uci("é2e4").is_none());
    }

    #[test]
    fn move_debug_display() {
        let m = Move::new(sq("g1"), sq("f3"));
        assert_eq!(format!("{:?}", m), "Move(g1f3)");
        assert_eq!(format!("{}", m), "g1f3");
    }
}
