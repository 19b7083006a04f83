//! Board representation and group analysis.
//!
//! The board is an N x N grid of cells stored row-major. All game-rule
//! operations treat boards as values: they clone, mutate the private copy,
//! and hand back a fresh board, so a caller's board is never aliased.

use std::fmt;

/// Stone color. Black moves first; White receives komi.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A point on the board as `(x, y)` with `0 <= x, y < size`.
/// `x` is the column, `y` the row; row 0 prints at the top.
pub type Point = (usize, usize);

/// A maximal connected set of same-colored stones plus its liberties.
///
/// Recomputed on demand, never cached. Liberties are deduplicated: a point
/// adjacent to two stones of the group is counted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

/// An N x N Go board.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Build a board from ASCII rows: `'X'` = Black, `'O'` = White,
    /// anything else = empty. Rows must form a square grid.
    pub fn from_layout(rows: &[&str]) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|r| r.chars().count() == size),
            "malformed board layout"
        );
        let cells = rows
            .iter()
            .flat_map(|row| {
                row.chars().map(|c| match c {
                    'X' => Some(Color::Black),
                    'O' => Some(Color::White),
                    _ => None,
                })
            })
            .collect();
        Self { size, cells }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.cells[self.idx(x, y)]
    }

    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Option<Color>) {
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// The 2-4 in-bounds orthogonal neighbors of a point.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < s {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < s {
            v.push((x, y + 1));
        }
        v.into_iter()
    }

    /// Flood-fill the connected group of same-colored stones at `(x, y)`
    /// together with its liberty set. An empty point yields an empty group.
    pub fn group_and_liberties(&self, x: usize, y: usize) -> Group {
        let Some(color) = self.get(x, y) else {
            return Group {
                stones: Vec::new(),
                liberties: Vec::new(),
            };
        };

        let mut visited = vec![false; self.size * self.size];
        let mut liberty_seen = vec![false; self.size * self.size];
        let mut stones = Vec::new();
        let mut liberties = Vec::new();
        let mut stack = vec![(x, y)];

        while let Some((cx, cy)) = stack.pop() {
            let i = self.idx(cx, cy);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            stones.push((cx, cy));

            for (nx, ny) in self.neighbors(cx, cy) {
                let ni = self.idx(nx, ny);
                match self.get(nx, ny) {
                    None => {
                        if !liberty_seen[ni] {
                            liberty_seen[ni] = true;
                            liberties.push((nx, ny));
                        }
                    }
                    Some(c) if c == color && !visited[ni] => stack.push((nx, ny)),
                    _ => {}
                }
            }
        }

        Group { stones, liberties }
    }

    /// Canonical content encoding of the board, used as an equality key for
    /// simple-ko detection. Two boards have the same signature exactly when
    /// their cell contents are identical.
    pub fn signature(&self) -> String {
        let mut s = String::with_capacity(self.size * (self.size + 1));
        for y in 0..self.size {
            if y > 0 {
                s.push('/');
            }
            for x in 0..self.size {
                s.push(match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                });
            }
        }
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.signature())
    }
}

/// Column letters for Go coordinates; 'I' is skipped by convention.
const COLUMN_LETTERS: &[u8] = b"ABCDEFGHJKLMNOPQRST";

/// Format a point as a Go coordinate (e.g. "D4"). Rows count from the
/// bottom, so `(0, size - 1)` is "A1".
pub fn coord_to_str(x: usize, y: usize, size: usize) -> String {
    format!("{}{}", COLUMN_LETTERS[x] as char, size - y)
}

/// Parse a Go coordinate back into a point. Returns `None` for anything
/// that does not name a point on a board of the given size.
pub fn str_to_coord(s: &str, size: usize) -> Option<Point> {
    let mut chars = s.chars();
    let col_char = chars.next()?.to_ascii_uppercase();
    let x = COLUMN_LETTERS[..size]
        .iter()
        .position(|&c| c as char == col_char)?;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 || row > size {
        return None;
    }
    Some((x, size - row))
}
