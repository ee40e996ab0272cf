//! Chess position store and rules engine.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of optional pieces plus position metadata
//! - [`decode`] / [`encode`] - FEN codec
//! - [`pseudo_legal_moves`] - per-piece movement rules, ignoring self-check
//! - [`legal_moves`] - the legality filter, simulating each candidate on a copy
//! - [`Board::apply`] - move execution with castling, en passant, promotion
//!   and counter bookkeeping
//!
//! # Example
//!
//! ```
//! use chess_rules::{legal_moves, Board};
//! use chess_core::{Move, Square};
//!
//! let mut board = Board::startpos();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert!(legal_moves(&board).contains(e2, e4));
//! board.apply(Move::new(e2, e4)).unwrap();
//! assert_eq!(
//!     board.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```
//!
//! Every operation is synchronous and takes the board explicitly. The
//! engine does no logging; errors go back to the caller as [`ChessError`].

mod board;
mod codec;
mod error;
mod execute;
mod legality;
pub mod movegen;
mod square_set;

pub use board::{Board, CastleSide, CastlingRights, Relocation};
pub use codec::{decode, encode};
pub use error::ChessError;
pub use legality::{
    is_check, is_king_attacked, legal_destinations, legal_moves, status, GameStatus, LegalMoves,
};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::pseudo_legal_moves;
pub use square_set::{SquareSet, SquareSetIter};
