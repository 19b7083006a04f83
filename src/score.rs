//! Area scoring (Chinese style): stones plus surrounded empty territory,
//! with komi added to White.
//!
//! An empty region counts as territory only when every stone on its border
//! is one color; regions touching both colors (dame) or no stone at all
//! count for neither side. Dead-stone removal is deliberately not attempted:
//! a stone with a liberty is scored as alive whatever its tactical status.

use crate::board::{Board, Color};

/// Per-color stone and territory counts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreDetail {
    pub black_stones: usize,
    pub white_stones: usize,
    pub black_territory: usize,
    pub white_territory: usize,
}

/// Final area score. `white` includes komi; `diff` is `black - white`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub black: f64,
    pub white: f64,
    pub diff: f64,
    pub detail: ScoreDetail,
}

/// Score the position by area: stones per color plus empty regions bordered
/// by exactly one color. Each empty point is flood-filled once; the visited
/// set is shared across all regions, so the whole pass is O(N^2).
pub fn score_area(board: &Board, komi: f64) -> Score {
    let n = board.size;
    let mut detail = ScoreDetail::default();

    for y in 0..n {
        for x in 0..n {
            match board.get(x, y) {
                Some(Color::Black) => detail.black_stones += 1,
                Some(Color::White) => detail.white_stones += 1,
                None => {}
            }
        }
    }

    let mut visited = vec![false; n * n];
    for y in 0..n {
        for x in 0..n {
            if board.get(x, y).is_some() || visited[y * n + x] {
                continue;
            }

            // Collect the maximal empty region around (x, y) and the colors
            // seen anywhere on its border.
            let mut region = 0usize;
            let mut borders_black = false;
            let mut borders_white = false;
            let mut stack = vec![(x, y)];
            visited[y * n + x] = true;

            while let Some((cx, cy)) = stack.pop() {
                region += 1;
                for (nx, ny) in board.neighbors(cx, cy) {
                    match board.get(nx, ny) {
                        Some(Color::Black) => borders_black = true,
                        Some(Color::White) => borders_white = true,
                        None => {
                            if !visited[ny * n + nx] {
                                visited[ny * n + nx] = true;
                                stack.push((nx, ny));
                            }
                        }
                    }
                }
            }

            match (borders_black, borders_white) {
                (true, false) => detail.black_territory += region,
                (false, true) => detail.white_territory += region,
                _ => {} // dame, or a fully empty board
            }
        }
    }

    let black = (detail.black_stones + detail.black_territory) as f64;
    let white = (detail.white_stones + detail.white_territory) as f64 + komi;
    Score {
        black,
        white,
        diff: black - white,
        detail,
    }
}
