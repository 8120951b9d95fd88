use std::env;
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use rampart_core::{Board, Color, is_in_check};
use rampart_engine::Searcher;
use tracing::info;

/// Search depth used when none is given on the command line.
const DEFAULT_DEPTH: u32 = 6;

/// Wall-clock budget in seconds used when none is given.
const DEFAULT_TIME_LIMIT: f64 = 5.0;

/// Usage: `rampart [depth] [seconds] [fen...]`.
///
/// All arguments are optional; the FEN may be passed as separate words.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();

    let depth = match args.first() {
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("invalid depth '{raw}'"))?,
        None => DEFAULT_DEPTH,
    };

    let seconds = match args.get(1) {
        Some(raw) => raw
            .parse::<f64>()
            .with_context(|| format!("invalid time limit '{raw}'"))?,
        None => DEFAULT_TIME_LIMIT,
    };
    ensure!(
        seconds.is_finite() && seconds > 0.0,
        "time limit must be a positive number of seconds, got {seconds}"
    );

    let board = if args.len() > 2 {
        let fen = args[2..].join(" ");
        fen.parse::<Board>()
            .with_context(|| format!("invalid FEN '{fen}'"))?
    } else {
        Board::starting_position()
    };

    info!(depth, seconds, "rampart starting");

    let side = match board.side_to_move() {
        Color::White => "White",
        Color::Black => "Black",
    };
    println!("Position ({side} to move):");
    println!("{}", board.pretty());

    let mut searcher = Searcher::new();
    let result = searcher.find_best_move(&board, depth, Duration::from_secs_f64(seconds));

    match result.best_move {
        Some(best) => {
            println!(
                "best {best}  score {}  depth {}  nodes {}",
                result.score, result.depth, result.nodes
            );
            let mut after = board;
            after.apply(best);
            println!("After {best}:");
            println!("{}", after.pretty());
        }
        None => {
            if is_in_check(&board, board.side_to_move()) {
                println!("checkmate: {side} has no moves");
            } else {
                println!("stalemate: {side} has no moves");
            }
        }
    }

    Ok(())
}
