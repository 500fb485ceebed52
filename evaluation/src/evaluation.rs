use chess::{Board, BoardStatus, Color, MoveGen, Piece, ALL_PIECES};

use crate::material::has_insufficient_material;
use crate::pst::pst_bonus;
use crate::scores::MATE_SCORE;
use crate::values::piece_value;

/// Weight of the legal-move-count term, in pawn units per move.
const MOBILITY_WEIGHT: f32 = 0.1;
/// Tempo penalty for the side currently in check.
const CHECK_PENALTY: f32 = 0.5;

/// Score a position from White's perspective. Positive = White advantage.
///
/// Pure and deterministic: material in pawn units, piece-square bonuses,
/// a small mobility term for the side to move, and a tempo penalty when
/// in check. Checkmate and dead draws short-circuit to their sentinels.
pub fn evaluate_board(board: &Board) -> f32 {
    match board.status() {
        BoardStatus::Checkmate => {
            // The side to move is the one that has been mated.
            return match board.side_to_move() {
                Color::White => -MATE_SCORE,
                Color::Black => MATE_SCORE,
            };
        }
        BoardStatus::Stalemate => return 0.0,
        BoardStatus::Ongoing => {}
    }

    if has_insufficient_material(board) {
        return 0.0;
    }

    let mut score = 0.0;
    score += material_and_position(board, Color::White);
    score -= material_and_position(board, Color::Black);

    let mobility = MoveGen::new_legal(board).count() as f32 * MOBILITY_WEIGHT;
    score += match board.side_to_move() {
        Color::White => mobility,
        Color::Black => -mobility,
    };

    if board.checkers().popcnt() > 0 {
        score += match board.side_to_move() {
            Color::White => -CHECK_PENALTY,
            Color::Black => CHECK_PENALTY,
        };
    }

    score
}

/// Score a position from the given side's perspective.
#[inline]
pub fn score_for(color: Color, board: &Board) -> f32 {
    match color {
        Color::White => evaluate_board(board),
        Color::Black => -evaluate_board(board),
    }
}

fn material_and_position(board: &Board, color: Color) -> f32 {
    let colored = *board.color_combined(color);

    let mut score = 0.0;
    for &piece in ALL_PIECES.iter() {
        let mask = *board.pieces(piece) & colored;
        for sq in mask {
            score += piece_value(piece) + pst_bonus(piece, color, sq);
        }
    }
    score
}
