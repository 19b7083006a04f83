//! Move legality and application.
//!
//! `try_play` is the single entry point for placing a stone: it resolves
//! captures, rejects suicide and simple-ko violations, and returns the
//! resulting board as a fresh value. `legal_moves` enumerates every point
//! where `try_play` succeeds.
//!
//! Rejections are ordinary values, not failures: an occupied point, a
//! suicidal placement, and a ko retake are all expected game states. The
//! checks run occupancy first, then suicide, then ko; the ko comparison is
//! only meaningful for a placement that is otherwise legal.

use crate::board::{Board, Color};

/// Why a placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Point is not empty
    Occupied,
    /// No liberties after capture resolution
    Suicide,
    /// Recreates the position from two plies ago
    Ko,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
        }
    }
}

/// A successfully applied move: the resulting board, the number of stones
/// captured, and the resulting position signature. Produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayedMove {
    pub x: usize,
    pub y: usize,
    pub board: Board,
    pub captured: usize,
    pub signature: String,
}

/// Try to place a `color` stone at `(x, y)`.
///
/// Every adjacent enemy group left without liberties is removed, not just
/// the first one found. A placement that would itself have no liberties is
/// suicide unless it captured at least one stone. If `ko_guard` is the
/// signature of the position two plies ago and the resulting position
/// matches it, the move retakes a ko and is rejected.
///
/// The input board is never modified.
pub fn try_play(
    board: &Board,
    x: usize,
    y: usize,
    color: Color,
    ko_guard: Option<&str>,
) -> Result<PlayedMove, MoveError> {
    if board.get(x, y).is_some() {
        return Err(MoveError::Occupied);
    }

    let mut next = board.clone();
    next.set(x, y, Some(color));

    let enemy = color.opponent();
    let mut captured = 0;
    for (nx, ny) in board.neighbors(x, y) {
        // Captured groups are cleared immediately so a group adjacent at two
        // points is not collected twice.
        if next.get(nx, ny) == Some(enemy) {
            let g = next.group_and_liberties(nx, ny);
            if g.liberties.is_empty() {
                captured += g.stones.len();
                for (sx, sy) in g.stones {
                    next.set(sx, sy, None);
                }
            }
        }
    }

    // Suicide: capturing at least one stone always frees a liberty, so only
    // a capture-less placement can strand its own group.
    if captured == 0 && next.group_and_liberties(x, y).liberties.is_empty() {
        return Err(MoveError::Suicide);
    }

    let signature = next.signature();
    if ko_guard.is_some_and(|guard| guard == signature) {
        return Err(MoveError::Ko);
    }

    Ok(PlayedMove {
        x,
        y,
        board: next,
        captured,
        signature,
    })
}

/// All legal moves for `color`, scanned in row-major order.
///
/// An empty result is not an error: it means the color must pass (board
/// full, or every empty point is self-capturing or ko-blocked).
pub fn legal_moves(board: &Board, color: Color, ko_guard: Option<&str>) -> Vec<PlayedMove> {
    let mut moves = Vec::new();
    for y in 0..board.size {
        for x in 0..board.size {
            if board.get(x, y).is_some() {
                continue;
            }
            if let Ok(mv) = try_play(board, x, y, color, ko_guard) {
                moves.push(mv);
            }
        }
    }
    moves
}
