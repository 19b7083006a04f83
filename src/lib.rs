//! Baduk-Rust: a Go rules engine with area scoring and a tiered opponent.
//!
//! The engine is purely functional: boards are values, moves produce new
//! boards, and illegal placements come back as `Result` values rather than
//! panics. Board size is a runtime parameter.
//!
//! ## Modules
//!
//! - [`constants`] - Scoring defaults, beam widths and heuristic weights
//! - [`board`] - Board state, groups, liberties and position signatures
//! - [`rules`] - Move legality, capture resolution, suicide and simple ko
//! - [`score`] - Area (Chinese) scoring with komi
//! - [`ai`] - Difficulty-tiered move selection
//!
//! ## Example
//!
//! ```
//! use baduk_rust::board::{Board, Color};
//! use baduk_rust::rules::try_play;
//! use baduk_rust::score::score_area;
//!
//! let board = Board::new(9);
//! let mv = try_play(&board, 4, 4, Color::Black, None).unwrap();
//! assert_eq!(mv.captured, 0);
//!
//! // A lone stone owns the whole board under area scoring.
//! let score = score_area(&mv.board, 6.5);
//! assert_eq!(score.black, 81.0);
//! ```

pub mod ai;
pub mod board;
pub mod constants;
pub mod rules;
pub mod score;
