// Score bounds and special values for move selection and search.

/// Sentinel magnitude for a checkmated position, in pawn units.
///
/// Large enough to dominate any reachable material + positional sum
/// (full material for one side is well under 200). Search offsets mate
/// scores by remaining depth so nearer mates win ties.
pub const MATE_SCORE: f32 = 1000.0;

pub const POS_INFINITY: f32 = f32::INFINITY;
pub const NEG_INFINITY: f32 = f32::NEG_INFINITY;
