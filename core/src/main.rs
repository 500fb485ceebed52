mod args;

use std::error::Error;
use std::fs::File;
use std::str::FromStr;

use args::Args;
use chess::Board;
use clap::Parser;
use engine::{choose_move, PickParams, SearchLimits};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let board = Board::from_str(&args.fen)
        .map_err(|e| format!("invalid position '{}': {e}", args.fen))?;

    let mut limits = SearchLimits::default();
    if let Some(depth) = args.depth {
        limits.depth = depth;
    }

    let params = PickParams {
        difficulty: args.difficulty,
        move_number: args.move_number,
        limits,
        ..PickParams::default()
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match choose_move(&board, &params, &mut rng) {
        Some(mv) => {
            let after = board.make_move_new(mv);
            println!("{mv} ({:+.2})", evaluation::evaluate_board(&after));
        }
        None => {
            println!("(none)");
        }
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?;
    }

    Ok(args)
}
