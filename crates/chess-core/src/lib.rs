//! Core value types for chess.
//!
//! This crate provides the plain data shared by the rules engine and its
//! consumers:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] for `(row, col)` board coordinates
//! - [`Move`] for move requests
//! - FEN field parsing and serialization

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{encode_placement, FenError, FenFields, Placement};
pub use mov::Move;
pub use piece::{Piece, PieceKind};
pub use square::Square;
