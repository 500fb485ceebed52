use chess::ChessMove;

/// How a cached value relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    Exact,
    /// The stored value is a lower bound (a beta cutoff happened).
    Lower,
    /// The stored value is an upper bound (no move raised alpha).
    Upper,
}

/// One transposition-cache entry, keyed externally by the board hash.
///
/// Lives only as long as a single `search_best_move` call; the cache is
/// never shared across searches, so entries cannot go stale.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TtEntry {
    pub depth: u8,
    pub value: f32,
    pub bound: Bound,
    pub best_move: Option<ChessMove>,
}

impl TtEntry {
    pub fn classify(value: f32, original_alpha: f32, beta: f32) -> Bound {
        if value <= original_alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}
