use chess::{Board, BoardStatus, ChessMove};
use evaluation::piece_value;
use rand::Rng;

use crate::classify::classify;
use crate::params::{PickParams, SearchLimits, TierConfig};
use crate::search::search_best_move;
use crate::see::hangs_piece;

// Medium-tier scoring weights, applied to classification tags.
const CAPTURE_WEIGHT: f32 = 10.0;
const CHECK_WEIGHT: f32 = 5.0;
const MATE_WEIGHT: f32 = 1000.0;
const CENTER_WEIGHT: f32 = 3.0;
const DEVELOP_WEIGHT: f32 = 4.0;
const HANGING_WEIGHT: f32 = 5.0;

#[inline]
pub(crate) fn random_move<R: Rng + ?Sized>(moves: &[ChessMove], rng: &mut R) -> ChessMove {
    moves[rng.gen_range(0..moves.len())]
}

/// Mostly random, occasionally sensible. The blunders are the point:
/// this tier exists so beginners get to win.
pub(crate) fn easy<R: Rng + ?Sized>(
    board: &Board,
    moves: &[ChessMove],
    cfg: &TierConfig,
    rng: &mut R,
) -> ChessMove {
    if rng.gen_bool(cfg.easy_random_chance) {
        return random_move(moves, rng);
    }

    let captures: Vec<ChessMove> = moves
        .iter()
        .copied()
        .filter(|m| board.piece_on(m.get_dest()).is_some())
        .collect();
    if !captures.is_empty() {
        return random_move(&captures, rng);
    }

    let safe: Vec<ChessMove> = moves
        .iter()
        .copied()
        .filter(|m| !hangs_piece(board, *m))
        .collect();
    if !safe.is_empty() {
        return random_move(&safe, rng);
    }

    random_move(moves, rng)
}

/// One-ply greedy scoring with jitter, plus a flat chance to play a
/// random move to keep the tier beatable.
pub(crate) fn medium<R: Rng + ?Sized>(
    board: &Board,
    moves: &[ChessMove],
    params: &PickParams,
    rng: &mut R,
) -> ChessMove {
    if rng.gen_bool(params.tiers.medium_blunder_chance) {
        return random_move(moves, rng);
    }

    let mut best = moves[0];
    let mut best_score = f32::NEG_INFINITY;

    for &mv in moves {
        let after = board.make_move_new(mv);
        let cls = classify(board, mv, &after, params.move_number);

        let mut score = 0.0;
        if let Some(victim) = cls.captured {
            score += CAPTURE_WEIGHT * piece_value(victim);
        }
        if cls.gives_check {
            score += CHECK_WEIGHT;
        }
        if after.status() == BoardStatus::Checkmate {
            score += MATE_WEIGHT;
        }
        if cls.controls_center {
            score += CENTER_WEIGHT;
        }
        if cls.develops_piece {
            score += DEVELOP_WEIGHT;
        }
        if hangs_piece(board, mv) {
            if let Some(mover) = board.piece_on(mv.get_source()) {
                score -= HANGING_WEIGHT * piece_value(mover);
            }
        }
        if params.tiers.medium_jitter > 0.0 {
            score += rng.gen_range(0.0..params.tiers.medium_jitter);
        }

        // Strict comparison: the first maximal move wins ties
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }

    best
}

/// Full-strength tier: bounded alpha-beta search, with a random legal
/// move as the defensive fallback if the search yields nothing.
pub(crate) fn hard<R: Rng + ?Sized>(
    board: &Board,
    moves: &[ChessMove],
    limits: &SearchLimits,
    rng: &mut R,
) -> ChessMove {
    match search_best_move(board, limits) {
        Some((mv, value)) => {
            log::debug!("hard tier picked {mv} ({value:+.2})");
            mv
        }
        None => {
            log::warn!("search produced no move despite legal moves, playing randomly");
            random_move(moves, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{MoveGen, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::str::FromStr;

    fn legal_moves(board: &Board) -> Vec<ChessMove> {
        MoveGen::new_legal(board).collect()
    }

    #[test]
    fn test_easy_returns_legal_moves_across_seeds() {
        let board = Board::default();
        let moves = legal_moves(&board);
        let cfg = TierConfig::default();

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = easy(&board, &moves, &cfg, &mut rng);
            assert!(moves.contains(&mv));
        }
    }

    #[test]
    fn test_easy_capture_rate_stays_below_ceiling() {
        // Safe captures (Qxa7, Qxd5, Rxd5) and a hanging one (Qxb6, met
        // by axb6) sit among many quiet moves. With a 0.6 uniform branch
        // the capture rate lands well under a hard tier's 100%, which is
        // the whole point of the tier.
        let board = Board::from_str("4k3/p1p5/1p6/Q2p4/8/8/8/3RK3 w - - 0 1").unwrap();
        let moves = legal_moves(&board);
        let cfg = TierConfig::default();

        let mut rng = StdRng::seed_from_u64(7);
        let trials = 2000;
        let mut captures = 0;
        for _ in 0..trials {
            let mv = easy(&board, &moves, &cfg, &mut rng);
            if board.piece_on(mv.get_dest()).is_some() {
                captures += 1;
            }
        }

        let rate = captures as f64 / trials as f64;
        assert!(rate < 0.7, "capture rate {rate} looks deterministic");
        assert!(rate > 0.3, "capture preference missing entirely ({rate})");
    }

    #[test]
    fn test_medium_takes_the_free_queen() {
        // Rxe8 is worth 90 points; jitter cannot bridge that.
        let board = Board::from_str("k3q3/8/8/8/8/8/8/4R2K w - - 0 1").unwrap();
        let moves = legal_moves(&board);
        let params = PickParams {
            tiers: TierConfig {
                medium_blunder_chance: 0.0,
                ..TierConfig::default()
            },
            ..PickParams::default()
        };

        let mut rng = StdRng::seed_from_u64(3);
        let mv = medium(&board, &moves, &params, &mut rng);
        assert_eq!(mv, ChessMove::new(Square::E1, Square::E8, None));
    }

    #[test]
    fn test_medium_prefers_mate_over_material() {
        // Ra8 delivers mate; nothing else comes close to its score.
        let board = Board::from_str("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1").unwrap();
        let moves = legal_moves(&board);
        let params = PickParams {
            tiers: TierConfig {
                medium_blunder_chance: 0.0,
                ..TierConfig::default()
            },
            ..PickParams::default()
        };

        let mut rng = StdRng::seed_from_u64(11);
        let mv = medium(&board, &moves, &params, &mut rng);
        assert_eq!(mv, ChessMove::new(Square::A1, Square::A8, None));
    }

    #[test]
    fn test_medium_avoids_hanging_its_queen() {
        // Qd1-d5 walks into exd5; with no captures on offer the penalty
        // should steer the queen elsewhere.
        let board = Board::from_str("4k3/8/4p3/8/8/8/8/3QK3 w - - 0 1").unwrap();
        let moves = legal_moves(&board);
        let params = PickParams {
            tiers: TierConfig {
                medium_blunder_chance: 0.0,
                medium_jitter: 0.0,
                ..TierConfig::default()
            },
            ..PickParams::default()
        };

        let mut rng = StdRng::seed_from_u64(5);
        let mv = medium(&board, &moves, &params, &mut rng);
        assert_ne!(mv, ChessMove::new(Square::D1, Square::D5, None));
    }

    #[test]
    fn test_hard_plays_the_mate() {
        let board = Board::from_str("6k1/5ppp/8/8/8/8/8/R6K w - - 0 1").unwrap();
        let moves = legal_moves(&board);
        let mut rng = StdRng::seed_from_u64(1);

        let mv = hard(&board, &moves, &SearchLimits::default(), &mut rng);
        assert_eq!(mv, ChessMove::new(Square::A1, Square::A8, None));
    }
}
