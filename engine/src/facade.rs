use chess::{Board, ChessMove, MoveGen};
use rand::Rng;

use crate::params::{Difficulty, PickParams};
use crate::tiers;

/// Pick one legal move for the side to move, or `None` if the position
/// is terminal.
///
/// This is the engine's sole entry point. Legality is guaranteed by
/// construction: every candidate comes from the rules engine's legal
/// move list, nothing is ever synthesized. The call is pure apart from
/// the injected random source, so concurrent games may invoke it freely.
///
/// Callers are expected to have handled game-over states already; the
/// `None` return is a defensive guard, not the primary termination path.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    params: &PickParams,
    rng: &mut R,
) -> Option<ChessMove> {
    let moves: Vec<ChessMove> = MoveGen::new_legal(board).collect();
    if moves.is_empty() {
        return None;
    }

    let mv = match params.difficulty {
        Difficulty::Easy => tiers::easy(board, &moves, &params.tiers, rng),
        Difficulty::Medium => tiers::medium(board, &moves, params, rng),
        Difficulty::Hard => tiers::hard(board, &moves, &params.limits, rng),
    };

    Some(mv)
}
