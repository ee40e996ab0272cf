//! Side color representation.

use std::fmt;

/// The two sides of a chess game.
///
/// `Light` moves first and is written in uppercase in FEN; its pieces start
/// on rows 6 and 7 and its pawns advance toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Light = 0,
    Dark = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn step (-1 for Light, +1 for Dark).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row holding this color's king and rooks at the start of a game.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    /// Row from which this color's pawns may advance two squares.
    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Farthest row for this color's pawns, where they promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    /// FEN active-color letter.
    #[inline]
    pub const fn to_fen_char(self) -> char {
        match self {
            Color::Light => 'w',
            Color::Dark => 'b',
        }
    }

    /// Parses a FEN active-color letter.
    #[inline]
    pub const fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Color::Light),
            'b' => Some(Color::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}
