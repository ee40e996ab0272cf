//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.
//! Each `(from, to)` pair counts once: a promotion is a single node here,
//! so reference counts only match at depths where no pawn promotes.

use crate::execute::commit;
use crate::legality::legal_moves;
use crate::Board;

/// Counts the number of leaf nodes at the given depth.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = legal_moves(board);

    if depth == 1 {
        return moves.count() as u64;
    }

    let mut nodes = 0u64;
    for m in moves.moves() {
        let mut next = board.clone();
        if commit(&mut next, m).is_ok() {
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

/// Perft with divide - shows node count for each move at depth-1.
/// Useful for debugging to identify which moves have incorrect counts.
pub fn perft_divide(board: &Board, depth: u32) -> Vec<(String, u64)> {
    let moves = legal_moves(board);
    let mut results = Vec::with_capacity(moves.count());

    for m in moves.moves() {
        let mut next = board.clone();
        if commit(&mut next, m).is_err() {
            continue;
        }
        let nodes = if depth > 1 {
            perft(&next, depth - 1)
        } else {
            1
        };
        results.push((m.to_uci(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_startpos_depth_1() {
        assert_eq!(perft(&Board::startpos(), 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        assert_eq!(perft(&Board::startpos(), 2), 400);
    }

    #[test]
    fn perft_startpos_depth_3() {
        assert_eq!(perft(&Board::startpos(), 3), 8902);
    }

    // Copying the board per candidate makes this slow without optimizations.
    #[test]
    #[ignore = "slow in debug builds"]
    fn perft_startpos_depth_4() {
        assert_eq!(perft(&Board::startpos(), 4), 197281);
    }

    #[test]
    fn perft_kiwipete() {
        let board = Board::from_fen(KIWIPETE).unwrap();
        assert_eq!(perft(&board, 1), 48);
        assert_eq!(perft(&board, 2), 2039);
    }

    #[test]
    fn perft_endgame_en_passant_and_pins() {
        let board = Board::from_fen(ENDGAME).unwrap();
        assert_eq!(perft(&board, 1), 14);
        assert_eq!(perft(&board, 2), 191);
        assert_eq!(perft(&board, 3), 2812);
    }

    #[test]
    fn perft_depth_0() {
        assert_eq!(perft(&Board::startpos(), 0), 1);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::startpos();
        let divide = perft_divide(&board, 2);
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, n)| *n == 20));
        assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 400);
        assert_eq!(divide[0].0, "a2a3");
    }
}
