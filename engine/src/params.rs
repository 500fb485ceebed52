use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Full moves below which a minor-piece move counts as development.
pub const OPENING_MOVES: u16 = 10;

/// Opponent strength tier. Immutable for the lifetime of one pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty: {s}")),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Probabilities for the randomized tiers. These are product tuning
/// knobs, not engine strength parameters: the easy tier is supposed to
/// blunder.
#[derive(Debug, Clone)]
pub struct TierConfig {
    /// Chance the easy tier ignores all heuristics and plays uniformly.
    pub easy_random_chance: f64,
    /// Chance the medium tier skips scoring entirely.
    pub medium_blunder_chance: f64,
    /// Upper bound of the uniform jitter added to medium-tier scores.
    pub medium_jitter: f32,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            easy_random_chance: 0.6,
            medium_blunder_chance: 0.2,
            medium_jitter: 3.0,
        }
    }
}

/// Bounds for the hard-tier search.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Search depth in plies.
    pub depth: u8,
    /// Most ordered moves examined per non-root node. The root always
    /// examines every legal move.
    pub max_width: usize,
    /// Transposition cache capacity, in entries, per search call.
    pub cache_entries: usize,
    /// Optional wall-clock budget, checked between root moves only; on
    /// expiry the best move found so far is returned.
    pub time_budget: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            depth: 2,
            max_width: 24,
            cache_entries: 1 << 16,
            time_budget: None,
        }
    }
}

/// Everything a single `choose_move` call needs besides the position.
#[derive(Debug, Clone)]
pub struct PickParams {
    pub difficulty: Difficulty,
    /// Fullmove number of the game; the rules engine's board does not
    /// carry it, and the development heuristic wants it.
    pub move_number: u16,
    pub limits: SearchLimits,
    pub tiers: TierConfig,
}

impl Default for PickParams {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            move_number: 1,
            limits: SearchLimits::default(),
            tiers: TierConfig::default(),
        }
    }
}
