//! FEN (Forsyth-Edwards Notation) parsing and serialization.
//!
//! This module works at the level of the six text fields. Turning the
//! fields into a playable board is the rules crate's job.

use crate::{Color, Piece, Square};
use thiserror::Error;

/// Piece placement grid, indexed `[row][col]` with row 0 = rank 8.
pub type Placement = [[Option<Piece>; 8]; 8];

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// The six FEN fields, lexically validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenFields {
    pub placement: Placement,
    pub active_color: Color,
    /// Castling letters in `KQkq` order; empty when no rights remain.
    pub castling: String,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl FenFields {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidFieldCount(parts.len()));
        }

        let placement = parse_placement(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::Light,
            "b" => Color::Dark,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        let castling = parse_castling(parts[2])?;
        let en_passant = parse_en_passant(parts[3])?;

        let halfmove_clock = parts[4]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;

        let fullmove_number = parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;

        Ok(FenFields {
            placement,
            active_color,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    /// Converts the fields back to a FEN string.
    pub fn to_fen(&self) -> String {
        let castling = if self.castling.is_empty() {
            "-"
        } else {
            self.castling.as_str()
        };
        let en_passant = match self.en_passant {
            Some(sq) => sq.to_algebraic(),
            None => "-".to_string(),
        };
        format!(
            "{} {} {} {} {} {}",
            encode_placement(&self.placement),
            self.active_color.to_fen_char(),
            castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(field: &str) -> Result<Placement, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut placement: Placement = [[None; 8]; 8];
    for (row, rank) in ranks.iter().enumerate() {
        let mut col = 0usize;
        for c in rank.chars() {
            if let Some(run @ 1..=8) = c.to_digit(10) {
                col += run as usize;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                if col < 8 {
                    placement[row][col] = Some(piece);
                }
                col += 1;
            } else {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "invalid character '{}' in rank {}",
                    c,
                    8 - row
                )));
            }
        }
        if col != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} has {} squares, expected 8",
                8 - row,
                col
            )));
        }
    }

    Ok(placement)
}

/// Encodes a placement grid as the first FEN field.
pub fn encode_placement(placement: &Placement) -> String {
    let mut out = String::with_capacity(71);
    for (row, rank) in placement.iter().enumerate() {
        let mut empty_count = 0;
        for slot in rank {
            match slot {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push_str(&empty_count.to_string());
        }
        if row < 7 {
            out.push('/');
        }
    }
    out
}

fn parse_castling(field: &str) -> Result<String, FenError> {
    if field == "-" {
        return Ok(String::new());
    }

    let mut seen = [false; 4];
    for c in field.chars() {
        let slot = match c {
            'K' => 0,
            'Q' => 1,
            'k' => 2,
            'q' => 3,
            _ => {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )))
            }
        };
        if seen[slot] {
            return Err(FenError::InvalidCastlingRights(format!(
                "duplicate flag '{}'",
                c
            )));
        }
        seen[slot] = true;
    }

    Ok("KQkq"
        .chars()
        .zip(seen)
        .filter_map(|(c, present)| present.then_some(c))
        .collect())
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }

    match Square::from_algebraic(field) {
        // Only the rank behind a double-stepped pawn can be a target.
        Some(sq) if sq.row() == 2 || sq.row() == 5 => Ok(Some(sq)),
        _ => Err(FenError::InvalidEnPassantSquare(field.to_string())),
    }
}

impl Default for FenFields {
    fn default() -> Self {
        Self::parse(Self::STARTPOS).expect("STARTPOS is valid")
    }
}
