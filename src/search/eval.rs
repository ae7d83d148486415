//! Static position evaluation.
//!
//! The evaluation function body is a search collaborator: callers depend only
//! on the signature `static_eval(board, tables, alpha, beta) -> i32`, a score
//! in centipawns from the side-to-move's perspective, with a lazy-margin
//! short-circuit against the current search window. The term weights below
//! are intentionally the minimum needed to make the search exercise material
//! swings (captures, promotions) correctly; they are not tuned.

use crate::board::{Board, Color, Piece};
use crate::moves::magic::MagicTables;

const LAZY_EVAL_MARGIN: i32 = 200;

const PIECES: [Piece; 5] = [
    Piece::Pawn,
    Piece::Knight,
    Piece::Bishop,
    Piece::Rook,
    Piece::Queen,
];

fn material_for(board: &Board, color: Color) -> i32 {
    PIECES
        .iter()
        .map(|&p| p.value() * board.pieces(p, color).count_ones() as i32)
        .sum()
}

/// Signed material balance (white minus black), matching `Board`'s invariant
/// that `material` tracks the sum of piece values by color.
pub fn material_balance(board: &Board) -> i32 {
    material_for(board, Color::White) - material_for(board, Color::Black)
}

/// Evaluate `board` from the side-to-move's perspective, in centipawns.
///
/// `tables` is accepted (rather than only `board`) so that richer
/// evaluation terms (mobility, king safety) can be reintroduced later
/// without changing the call sites in `search`.
pub fn static_eval(board: &Board, _tables: &MagicTables, alpha: i32, beta: i32) -> i32 {
    let side = board.side_to_move;
    let sign = if side == Color::White { 1 } else { -1 };

    let score = material_balance(board) * sign;

    if score - LAZY_EVAL_MARGIN >= beta {
        return score;
    }
    if score + LAZY_EVAL_MARGIN <= alpha {
        return score;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::moves::magic::loader::load_magic_tables;

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new();
        let tables = load_magic_tables();
        assert_eq!(static_eval(&board, &tables, -10_000, 10_000), 0);
    }

    #[test]
    fn missing_queen_favors_the_other_side() {
        let mut board = Board::new();
        let queens = board.pieces(Piece::Queen, Color::Black);
        board.set_bb(Color::Black, Piece::Queen, queens & !queens);
        let tables = load_magic_tables();
        assert!(static_eval(&board, &tables, -10_000, 10_000) > 0);
    }

    #[test]
    fn score_is_signed_by_side_to_move() {
        let mut board = Board::new();
        let queens = board.pieces(Piece::Queen, Color::Black);
        board.set_bb(Color::Black, Piece::Queen, queens & !queens);
        let tables = load_magic_tables();
        let white_score = static_eval(&board, &tables, -10_000, 10_000);
        board.side_to_move = Color::Black;
        let black_score = static_eval(&board, &tables, -10_000, 10_000);
        assert_eq!(white_score, -black_score);
    }
}
