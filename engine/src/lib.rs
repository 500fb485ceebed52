// Tiered move selection on top of an external rules engine.
//
// The `engine` crate turns a position into exactly one legal move at a
// chosen difficulty. It never generates moves itself: legality comes from
// the `chess` crate, scoring from the `evaluation` crate. Everything here
// is stateless per call, so concurrent games can share nothing.

mod classify;
mod facade;
mod move_order;
mod params;
mod search;
mod see;
mod tiers;
mod tt;

pub use classify::{classify, MoveClassification, CENTER_SQUARES};
pub use facade::choose_move;
pub use params::{Difficulty, PickParams, SearchLimits, TierConfig, OPENING_MOVES};
pub use search::search_best_move;
pub use see::{hangs_piece, see};
