use chess::{Board, ChessMove, MoveGen, Piece};
use evaluation::piece_value;

use crate::classify::classify;

// Ordering bands: promotions, then captures by victim value, then
// checks, then quiet moves. Tighter alpha-beta bounds come from trying
// the loud moves first.
const PROMOTION_SCORE: i32 = 10_000;
const CAPTURE_SCORE: i32 = 1_000;
const CHECK_SCORE: i32 = 100;

/// Legal moves with their resulting positions, loudest first.
///
/// The child boards are returned alongside the moves because both the
/// ordering heuristic and the search need them; computing them once
/// halves the `make_move_new` calls per node.
pub(crate) fn ordered_moves(board: &Board) -> Vec<(ChessMove, Board)> {
    let mut scored: Vec<(ChessMove, Board, i32)> = MoveGen::new_legal(board)
        .map(|m| {
            let after = board.make_move_new(m);
            let score = score(board, m, &after);
            (m, after, score)
        })
        .collect();

    scored.sort_unstable_by(|a, b| b.2.cmp(&a.2));
    scored.into_iter().map(|(m, after, _)| (m, after)).collect()
}

fn score(board: &Board, mv: ChessMove, after: &Board) -> i32 {
    // The move number is irrelevant for ordering, only the loud tags are
    let cls = classify(board, mv, after, 0);

    if cls.is_promotion {
        let promo = mv.get_promotion().map_or(0.0, piece_value);
        return PROMOTION_SCORE + promo as i32;
    }

    if let Some(victim) = cls.captured {
        return CAPTURE_SCORE + piece_value(victim) as i32;
    }

    if cls.gives_check {
        return CHECK_SCORE;
    }

    // Quiet moves: nudge more valuable movers first
    match board.piece_on(mv.get_source()) {
        Some(Piece::King) => 0,
        Some(piece) => piece_value(piece) as i32,
        None => 0,
    }
}
