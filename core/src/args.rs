use std::path::PathBuf;

use clap::Parser;
use engine::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "Sparring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Position to move from, in FEN. Defaults to the starting position.
    #[arg(
        short,
        long,
        default_value = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    )]
    pub fen: String,

    /// Playing strength: easy, medium or hard.
    #[arg(short, long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Search depth override for the hard tier.
    #[arg(long)]
    pub depth: Option<u8>,

    /// Fullmove number of the game, used by the opening heuristics.
    #[arg(short, long, default_value_t = 1)]
    pub move_number: u16,

    /// Seed for the random source. Omit for a fresh seed per run.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log engine decisions to a file for debugging.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
