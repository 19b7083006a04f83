//! Opponent move selection.
//!
//! Three difficulty tiers share one candidate pipeline: enumerate the legal
//! moves, rank them with a cheap per-move heuristic, then spend lookahead
//! effort only on the top of the ranking.
//!
//! - Beginner picks uniformly at random among the best few candidates.
//! - Intermediate evaluates the top candidates one ply deep by area score.
//! - Advanced searches two plies: for each of its top candidates it assumes
//!   the opponent answers with the worst (for the mover) of the opponent's
//!   own top heuristic replies. The opponent is beam-limited on purpose;
//!   full-width minimax is outside the intended strength and latency budget.
//!
//! Every tier returns `None` when there is no legal move, which tells the
//! session layer this color must pass.

use std::str::FromStr;

use crate::board::{Board, Color};
use crate::constants::{
    BEGINNER_MAX_POOL, BEGINNER_TOP_FRACTION, CAPTURE_WEIGHT, CENTER_BASE, ENEMY_WEIGHT,
    FRIENDLY_WEIGHT, ONE_PLY_BEAM, ONE_PLY_SHAPING, REPLY_BEAM, REPLY_SHAPING, SELF_ATARI_PENALTY,
    TWO_PLY_BEAM, TWO_PLY_SHAPING,
};
use crate::rules::{legal_moves, PlayedMove};
use crate::score::score_area;

/// Playing strength of the selection algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            other => Err(format!(
                "unknown difficulty '{other}' (expected beginner, intermediate or advanced)"
            )),
        }
    }
}

/// A legal move annotated with its heuristic ranking score.
struct Candidate {
    mv: PlayedMove,
    heur: f64,
}

/// Rank a candidate move on the position it was played from.
///
/// Captures dominate; contact with friendly stones is worth more than
/// contact with enemy stones; central moves get a distance bonus; leaving
/// the placed stone's own group with at most one liberty is penalized.
/// Adjacency counts use the pre-move board.
fn heuristic(before: &Board, mv: &PlayedMove, color: Color) -> f64 {
    let enemy = color.opponent();
    let mut friendly = 0usize;
    let mut hostile = 0usize;
    for (nx, ny) in before.neighbors(mv.x, mv.y) {
        match before.get(nx, ny) {
            Some(c) if c == color => friendly += 1,
            Some(c) if c == enemy => hostile += 1,
            _ => {}
        }
    }

    let center = (before.size as f64 - 1.0) / 2.0;
    let dist = (mv.x as f64 - center).hypot(mv.y as f64 - center);

    let own = mv.board.group_and_liberties(mv.x, mv.y);
    let self_atari = if own.liberties.len() <= 1 {
        SELF_ATARI_PENALTY
    } else {
        0.0
    };

    mv.captured as f64 * CAPTURE_WEIGHT
        + friendly as f64 * FRIENDLY_WEIGHT
        + hostile as f64 * ENEMY_WEIGHT
        + (CENTER_BASE - dist)
        + self_atari
}

/// Area-score differential from `color`'s perspective (positive = ahead).
fn eval_for(board: &Board, color: Color, komi: f64) -> f64 {
    let diff = score_area(board, komi).diff;
    match color {
        Color::Black => diff,
        Color::White => -diff,
    }
}

/// Rank all legal moves for `color`, best heuristic first.
fn ranked_candidates(board: &Board, color: Color, ko_guard: Option<&str>) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = legal_moves(board, color, ko_guard)
        .into_iter()
        .map(|mv| Candidate {
            heur: heuristic(board, &mv, color),
            mv,
        })
        .collect();
    candidates.sort_by(|a, b| b.heur.total_cmp(&a.heur));
    candidates
}

/// Choose a move for `color` at the given difficulty, or `None` when no
/// legal move exists and the color must pass.
///
/// Beginner is the only tier that consults the random generator; the
/// lookahead tiers are deterministic for a given position. Ties in the
/// lookahead tiers go to the first maximal candidate in ranking order.
pub fn choose_move(
    board: &Board,
    color: Color,
    ko_guard: Option<&str>,
    difficulty: Difficulty,
    komi: f64,
    rng: &mut fastrand::Rng,
) -> Option<PlayedMove> {
    let mut candidates = ranked_candidates(board, color, ko_guard);
    if candidates.is_empty() {
        return None;
    }

    let pick = match difficulty {
        Difficulty::Beginner => {
            let pool = ((candidates.len() as f64 * BEGINNER_TOP_FRACTION).floor() as usize)
                .clamp(1, BEGINNER_MAX_POOL);
            rng.usize(0..pool)
        }
        Difficulty::Intermediate => {
            let mut best = 0;
            let mut best_value = f64::NEG_INFINITY;
            for (i, c) in candidates.iter().take(ONE_PLY_BEAM).enumerate() {
                let value = eval_for(&c.mv.board, color, komi) + c.heur * ONE_PLY_SHAPING;
                if value > best_value {
                    best_value = value;
                    best = i;
                }
            }
            best
        }
        Difficulty::Advanced => {
            // Ko guard for the reply ply: the position the opponent saw two
            // plies before replying is the one on the table right now.
            let reply_guard = board.signature();
            let enemy = color.opponent();

            let mut best = 0;
            let mut best_value = f64::NEG_INFINITY;
            for (i, c) in candidates.iter().take(TWO_PLY_BEAM).enumerate() {
                let mut replies = ranked_candidates(&c.mv.board, enemy, Some(&reply_guard));
                replies.truncate(REPLY_BEAM);

                let value = if replies.is_empty() {
                    eval_for(&c.mv.board, color, komi) + c.heur * TWO_PLY_SHAPING
                } else {
                    let pessimistic = replies
                        .iter()
                        .map(|r| eval_for(&r.mv.board, color, komi) - r.heur * REPLY_SHAPING)
                        .fold(f64::INFINITY, f64::min);
                    pessimistic + c.heur * TWO_PLY_SHAPING
                };

                if value > best_value {
                    best_value = value;
                    best = i;
                }
            }
            best
        }
    };

    Some(candidates.swap_remove(pick).mv)
}
