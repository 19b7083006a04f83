//! Baduk-Rust: self-play session driver.
//!
//! Runs a complete game between two engine-controlled players, one
//! difficulty tier per color, printing each move in Go coordinates and the
//! final area score.
//!
//! ## Usage
//!
//! - `baduk-rust` - 9x9 game, intermediate vs intermediate
//! - `baduk-rust --size 19 --black advanced --white beginner --seed 7`

use anyhow::{bail, Result};
use clap::Parser;

use baduk_rust::ai::{choose_move, Difficulty};
use baduk_rust::board::{coord_to_str, Board, Color};
use baduk_rust::constants::{DEFAULT_KOMI, MAX_GAME_FACTOR, STANDARD_SIZES};
use baduk_rust::score::score_area;

/// Baduk-Rust: a Go engine that plays itself
#[derive(Parser)]
#[command(name = "baduk-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (9, 13 or 19)
    #[arg(long, default_value_t = 9)]
    size: usize,

    /// Komi added to White's score
    #[arg(long, default_value_t = DEFAULT_KOMI)]
    komi: f64,

    /// Difficulty playing Black
    #[arg(long, default_value = "intermediate")]
    black: Difficulty,

    /// Difficulty playing White
    #[arg(long, default_value = "intermediate")]
    white: Difficulty,

    /// Seed for the beginner tier's random pick
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Only print the final position and score
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if !STANDARD_SIZES.contains(&cli.size) {
        bail!("unsupported board size {} (expected 9, 13 or 19)", cli.size);
    }

    let mut board = Board::new(cli.size);
    let mut rng = fastrand::Rng::with_seed(cli.seed);

    // Signature of the position two plies back, for the simple-ko rule.
    // Cleared whenever a player passes.
    let mut ko_guard: Option<String> = None;

    let mut to_move = Color::Black;
    let mut passes = 0;
    let mut captures_by_black = 0;
    let mut captures_by_white = 0;
    let max_moves = MAX_GAME_FACTOR * cli.size * cli.size;

    for move_no in 1.. {
        if passes >= 2 || move_no > max_moves {
            break;
        }

        let tier = match to_move {
            Color::Black => cli.black,
            Color::White => cli.white,
        };
        let label = match to_move {
            Color::Black => "Black",
            Color::White => "White",
        };

        let before = board.signature();
        match choose_move(&board, to_move, ko_guard.as_deref(), tier, cli.komi, &mut rng) {
            Some(mv) => {
                if !cli.quiet {
                    let coord = coord_to_str(mv.x, mv.y, cli.size);
                    if mv.captured > 0 {
                        println!("{move_no:>3}. {label} {coord} (captures {})", mv.captured);
                    } else {
                        println!("{move_no:>3}. {label} {coord}");
                    }
                }
                match to_move {
                    Color::Black => captures_by_black += mv.captured,
                    Color::White => captures_by_white += mv.captured,
                }
                board = mv.board;
                ko_guard = Some(before);
                passes = 0;
            }
            None => {
                if !cli.quiet {
                    println!("{move_no:>3}. {label} passes");
                }
                ko_guard = None;
                passes += 1;
            }
        }

        to_move = to_move.opponent();
    }

    println!("\n{board}");
    println!("Captures: Black {captures_by_black}, White {captures_by_white}");

    let score = score_area(&board, cli.komi);
    println!(
        "Black: {} ({} stones + {} territory)",
        score.black, score.detail.black_stones, score.detail.black_territory
    );
    println!(
        "White: {} ({} stones + {} territory + {} komi)",
        score.white, score.detail.white_stones, score.detail.white_territory, cli.komi
    );
    if score.diff > 0.0 {
        println!("Black wins by {}", score.diff);
    } else if score.diff < 0.0 {
        println!("White wins by {}", -score.diff);
    } else {
        println!("Draw");
    }

    Ok(())
}
