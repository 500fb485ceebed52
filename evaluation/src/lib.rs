pub mod scores;

mod evaluation;
mod material;
mod pst;
mod values;

pub use evaluation::{evaluate_board, score_for};
pub use material::has_insufficient_material;
pub use pst::pst_bonus;
pub use values::piece_value;
