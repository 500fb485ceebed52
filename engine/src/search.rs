use std::num::NonZeroUsize;
use std::time::Instant;

use chess::{Board, BoardStatus, ChessMove, Color};
use evaluation::scores::{MATE_SCORE, NEG_INFINITY, POS_INFINITY};
use evaluation::evaluate_board;
use lru::LruCache;

use crate::move_order::ordered_moves;
use crate::params::SearchLimits;
use crate::tt::{Bound, TtEntry};

type TranspositionCache = LruCache<u64, TtEntry>;

/// Depth-bounded minimax with alpha-beta pruning.
///
/// The root examines every legal move in heuristic order and returns the
/// one with the best minimax value for the side to move, together with
/// that value (from White's perspective). First-encountered moves win
/// ties. Returns `None` only for terminal positions.
///
/// The transposition cache lives on this call's stack frame and dies
/// with it; nothing is shared across invocations.
pub fn search_best_move(board: &Board, limits: &SearchLimits) -> Option<(ChessMove, f32)> {
    if board.status() != BoardStatus::Ongoing {
        return None;
    }

    let start = Instant::now();
    let capacity =
        NonZeroUsize::new(limits.cache_entries).unwrap_or(NonZeroUsize::new(1).unwrap());
    let mut cache: TranspositionCache = LruCache::new(capacity);

    let maximizing = board.side_to_move() == Color::White;
    let mut alpha = NEG_INFINITY;
    let mut beta = POS_INFINITY;

    let mut best: Option<(ChessMove, f32)> = None;

    // The root is never width-capped: every legal move gets a look.
    for (mv, after) in ordered_moves(board) {
        if let (Some(budget), Some(_)) = (limits.time_budget, &best) {
            // Checked between root moves so an expired budget still
            // yields the best move found so far.
            if start.elapsed() >= budget {
                log::debug!("search budget exhausted, returning current best");
                break;
            }
        }

        let value = alpha_beta(
            &mut cache,
            &after,
            limits.depth.saturating_sub(1),
            alpha,
            beta,
            limits,
        );

        log::debug!("root move {mv}: {value:.2}");

        let improved = match best {
            None => true,
            Some((_, best_value)) => {
                if maximizing {
                    value > best_value
                } else {
                    value < best_value
                }
            }
        };
        if improved {
            best = Some((mv, value));
        }

        if let Some((_, best_value)) = best {
            if maximizing {
                alpha = alpha.max(best_value);
            } else {
                beta = beta.min(best_value);
            }
        }

        if alpha >= beta {
            break;
        }
    }

    best
}

fn alpha_beta(
    cache: &mut TranspositionCache,
    board: &Board,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    limits: &SearchLimits,
) -> f32 {
    match board.status() {
        BoardStatus::Checkmate => {
            // Offset by remaining depth so nearer mates dominate.
            let value = MATE_SCORE + f32::from(depth);
            return match board.side_to_move() {
                Color::White => -value,
                Color::Black => value,
            };
        }
        BoardStatus::Stalemate => return 0.0,
        BoardStatus::Ongoing => {}
    }

    if depth == 0 {
        return evaluate_board(board);
    }

    let hash = board.get_hash();
    let original_alpha = alpha;
    let original_beta = beta;

    let mut cached_move = None;
    if let Some(entry) = cache.get(&hash).copied() {
        cached_move = entry.best_move;
        if entry.depth >= depth {
            match entry.bound {
                Bound::Exact => return entry.value,
                Bound::Lower => alpha = alpha.max(entry.value),
                Bound::Upper => beta = beta.min(entry.value),
            }
            if alpha >= beta {
                return entry.value;
            }
        }
    }

    let mut moves = ordered_moves(board);
    if let Some(cached) = cached_move {
        if let Some(pos) = moves.iter().position(|(m, _)| *m == cached) {
            moves.swap(0, pos);
        }
    }

    // Width cap below the root: an explicit speed-for-accuracy trade.
    moves.truncate(limits.max_width.max(1));

    let mut best_value;
    let mut best_move = None;

    if board.side_to_move() == Color::White {
        best_value = NEG_INFINITY;
        for (mv, after) in moves {
            let value = alpha_beta(cache, &after, depth - 1, alpha, beta, limits);
            if value > best_value {
                best_value = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_value);
            if alpha >= beta {
                break;
            }
        }
    } else {
        best_value = POS_INFINITY;
        for (mv, after) in moves {
            let value = alpha_beta(cache, &after, depth - 1, alpha, beta, limits);
            if value < best_value {
                best_value = value;
                best_move = Some(mv);
            }
            beta = beta.min(best_value);
            if beta <= alpha {
                break;
            }
        }
    }

    store(
        cache,
        hash,
        depth,
        best_value,
        original_alpha,
        original_beta,
        best_move,
    );
    best_value
}

// Bounds are classified against the window the node was entered with,
// not the narrowed one, so fully-searched nodes store Exact.
fn store(
    cache: &mut TranspositionCache,
    hash: u64,
    depth: u8,
    value: f32,
    original_alpha: f32,
    original_beta: f32,
    best_move: Option<ChessMove>,
) {
    let entry = TtEntry {
        depth,
        value,
        bound: TtEntry::classify(value, original_alpha, original_beta),
        best_move,
    };

    // Keep the deeper result when the same position comes back around
    match cache.peek(&hash) {
        Some(existing) if existing.depth > depth => {}
        _ => {
            cache.put(hash, entry);
        }
    }
}
