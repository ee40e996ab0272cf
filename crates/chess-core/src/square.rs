//! Board square representation.

use std::fmt;

/// A square on the chess board, addressed by `(row, col)`.
///
/// Rows follow FEN order: row 0 is rank 8 (the first rank group of the
/// placement field) and row 7 is rank 1. Column 0 is file `a`.
/// So `e2` is `(6, 4)` and `e3` is `(5, 4)`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, returning `None` when either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Creates a square from index (0-63, `row * 8 + col`).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if file < b'a' || file > b'h' || rank < b'1' || rank > b'8' {
            return None;
        }
        Some(Square {
            row: b'8' - rank,
            col: file - b'a',
        })
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.row * 8 + self.col
    }

    /// Returns the square displaced by `(d_row, d_col)`, if it is on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// File letter ('a'-'h').
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit ('1'-'8').
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{} {})", self.row, self.col, self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn square_new_bounds() {
        assert!(Square::new(7, 7).is_some());
        assert!(Square::new(8, 0).is_none());
        assert!(Square::new(0, 8).is_none());
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a8"), Some(sq(0, 0)));
        assert_eq!(Square::from_algebraic("h1"), Some(sq(7, 7)));
        assert_eq!(Square::from_algebraic("e2"), Some(sq(6, 4)));
        assert_eq!(Square::from_algebraic("e3"), Some(sq(5, 4)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(sq(0, 0).to_algebraic(), "a8");
        assert_eq!(sq(7, 7).to_algebraic(), "h1");
        assert_eq!(sq(4, 4).to_algebraic(), "e4");
        assert_eq!(format!("{}", sq(5, 4)), "e3");
    }

    #[test]
    fn square_offset() {
        assert_eq!(sq(6, 4).offset(-1, 0), Some(sq(5, 4)));
        assert_eq!(sq(0, 0).offset(-1, 0), None);
        assert_eq!(sq(7, 7).offset(0, 1), None);
        assert_eq!(sq(3, 3).offset(2, -1), Some(sq(5, 2)));
    }

    #[test]
    fn square_index() {
        assert_eq!(sq(0, 0).index(), 0);
        assert_eq!(sq(7, 7).index(), 63);
        assert_eq!(Square::from_index(12), Some(sq(1, 4)));
        assert_eq!(Square::from_index(64), None);
    }
}
