//! Engine parameters: scoring defaults, selection beam widths, and the
//! move-ranking heuristic weights.
//!
//! The weights were tuned for play that feels reasonable at each difficulty
//! tier on 9x9 through 19x19 boards; they are plain data, not rules. Board
//! size is a runtime value: any N >= 1 works, the driver merely restricts
//! itself to the standard sizes.

// =============================================================================
// Scoring
// =============================================================================

/// Default komi (compensation added to White's score). Fractional so that
/// a draw is impossible at default settings.
pub const DEFAULT_KOMI: f64 = 6.5;

/// Board sizes offered by the driver. The engine itself is size-agnostic.
pub const STANDARD_SIZES: [usize; 3] = [9, 13, 19];

// =============================================================================
// Candidate Selection (beam widths per difficulty tier)
// =============================================================================

/// Beginner: fraction of the ranked candidate list eligible for random pick.
pub const BEGINNER_TOP_FRACTION: f64 = 0.25;

/// Beginner: cap on the random-pick pool.
pub const BEGINNER_MAX_POOL: usize = 6;

/// Intermediate: number of top-ranked candidates evaluated one ply deep.
pub const ONE_PLY_BEAM: usize = 16;

/// Advanced: number of top-ranked candidates searched two plies deep.
pub const TWO_PLY_BEAM: usize = 12;

/// Advanced: number of opponent replies considered per candidate.
pub const REPLY_BEAM: usize = 8;

// =============================================================================
// Heuristic Weights (per-move ranking score)
// =============================================================================

/// Points per stone captured by the candidate move.
pub const CAPTURE_WEIGHT: f64 = 10.0;

/// Points per adjacent friendly stone (pre-move board).
pub const FRIENDLY_WEIGHT: f64 = 1.6;

/// Points per adjacent enemy stone (pre-move board).
pub const ENEMY_WEIGHT: f64 = 0.6;

/// Base of the center bonus: `CENTER_BASE - distance_from_center`.
pub const CENTER_BASE: f64 = 4.0;

/// Penalty when the move leaves its own group with at most one liberty.
pub const SELF_ATARI_PENALTY: f64 = -3.0;

// =============================================================================
// Search Shaping (heuristic admixture in the lookahead tiers)
// =============================================================================

/// Intermediate: weight of the candidate's own heuristic as a tie-breaker.
pub const ONE_PLY_SHAPING: f64 = 0.3;

/// Advanced: weight of the candidate's own heuristic.
pub const TWO_PLY_SHAPING: f64 = 0.2;

/// Advanced: weight subtracted for the strength of the opponent's reply.
pub const REPLY_SHAPING: f64 = 0.1;

// =============================================================================
// Game Length
// =============================================================================

/// Driver safety cap on game length, in moves, as a multiple of the board
/// area (allows for captures and refills).
pub const MAX_GAME_FACTOR: usize = 3;
