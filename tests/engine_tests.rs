//! Rules and scoring tests driven through the public API, covering move
//! sequences that cross module boundaries: captures feeding the score,
//! the ko guard across several plies, and legality enumeration.

use baduk_rust::board::{str_to_coord, Board, Color};
use baduk_rust::rules::{legal_moves, try_play, MoveError, PlayedMove};
use baduk_rust::score::score_area;

// =============================================================================
// Helpers
// =============================================================================

/// Apply alternating moves ("D4"-style coordinates, Black first) to an empty
/// board of the given size, threading the ko guard the way a session does.
fn play_sequence(size: usize, moves: &[&str]) -> Board {
    let mut board = Board::new(size);
    let mut guard: Option<String> = None;
    let mut color = Color::Black;
    for m in moves {
        let (x, y) = str_to_coord(m, size).unwrap_or_else(|| panic!("bad coord {m}"));
        let before = board.signature();
        let mv = try_play(&board, x, y, color, guard.as_deref())
            .unwrap_or_else(|e| panic!("{m} for {color:?}: {e}"));
        board = mv.board;
        guard = Some(before);
        color = color.opponent();
    }
    board
}

// =============================================================================
// Capture sequences
// =============================================================================

#[test]
fn ladder_like_sequence_captures_the_chased_stone() {
    // Black surrounds a lone white stone over several plies; White plays
    // elsewhere. The final black move removes it.
    let board = play_sequence(
        9,
        &[
            "D5", "E5", // white stone to chase
            "E6", "A1", "F5", "A2", "E4", "A3",
        ],
    );
    let (ex, ey) = str_to_coord("E5", 9).unwrap();
    assert_eq!(board.get(ex, ey), None);
    let s = score_area(&board, 0.0);
    assert_eq!(s.detail.white_stones, 3);
    assert_eq!(s.detail.black_stones, 4);
}

#[test]
fn captured_stones_become_playable_again() {
    let start = Board::from_layout(&[".X.", "XOX", "..."]);
    let mv = try_play(&start, 1, 2, Color::Black, None).unwrap();
    assert_eq!(mv.captured, 1);
    // The vacated point is open to either color on the next ply.
    assert!(try_play(&mv.board, 1, 1, Color::White, None).is_ok());
    assert!(try_play(&mv.board, 1, 1, Color::Black, None).is_ok());
}

// =============================================================================
// Ko across plies
// =============================================================================

#[test]
fn ko_retake_legal_after_an_intervening_exchange() {
    let start = Board::from_layout(&[
        ".XO......",
        "XO.O.....",
        ".XO......",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
        ".........",
    ]);
    let pre_capture = start.signature();

    // Black takes the ko.
    let black = try_play(&start, 2, 1, Color::Black, None).unwrap();
    assert_eq!(
        try_play(&black.board, 1, 1, Color::White, Some(&pre_capture)),
        Err(MoveError::Ko)
    );

    // White plays a ko threat elsewhere, Black answers. The guard has moved
    // on, so the retake no longer reproduces the position two plies back.
    let threat_guard = black.board.signature();
    let white = try_play(&black.board, 7, 7, Color::White, Some(&pre_capture)).unwrap();
    let answer = try_play(&white.board, 6, 7, Color::Black, Some(&threat_guard)).unwrap();

    let guard_now = white.board.signature();
    let retake = try_play(&answer.board, 1, 1, Color::White, Some(&guard_now)).unwrap();
    assert_eq!(retake.captured, 1);
}

#[test]
fn guard_only_blocks_an_exact_signature_match() {
    let b = Board::from_layout(&["...", ".X.", "..."]);
    // A guard naming an unrelated position never rejects anything.
    let unrelated = Board::new(3).signature();
    assert!(try_play(&b, 0, 0, Color::White, Some(&unrelated)).is_ok());
}

// =============================================================================
// Legality enumeration
// =============================================================================

#[test]
fn legal_moves_excludes_only_rejected_points() {
    // An eye at (0,0) is suicide for White, and the ko point is guarded.
    let start = Board::from_layout(&[
        ".XO..",
        "XO.O.",
        ".XO..",
        ".....",
        ".....",
    ]);
    let guard = start.signature();
    let black = try_play(&start, 2, 1, Color::Black, None).unwrap();

    let moves = legal_moves(&black.board, Color::White, Some(&guard));
    assert!(moves.iter().all(|m| (m.x, m.y) != (1, 1)), "ko point listed");
    for mv in &moves {
        assert_eq!(black.board.get(mv.x, mv.y), None);
        assert_eq!(mv.board.get(mv.x, mv.y), Some(Color::White));
    }
}

#[test]
fn legal_move_results_match_direct_play() {
    let b = Board::from_layout(&[".X.O.", "XO.O.", ".XO..", "..X..", "....."]);
    for mv in legal_moves(&b, Color::Black, None) {
        let direct: PlayedMove = try_play(&b, mv.x, mv.y, Color::Black, None).unwrap();
        assert_eq!(direct, mv);
    }
}

// =============================================================================
// Scoring after play
// =============================================================================

#[test]
fn small_finished_game_scores_as_expected() {
    // 5x5, Black wall on column C, White lives on the right two columns.
    let board = Board::from_layout(&[
        "..XO.",
        "..XO.",
        "..XO.",
        "..XO.",
        "..XO.",
    ]);
    let s = score_area(&board, 0.5);
    assert_eq!(s.detail.black_stones, 5);
    assert_eq!(s.detail.white_stones, 5);
    assert_eq!(s.detail.black_territory, 10);
    assert_eq!(s.detail.white_territory, 5);
    assert_eq!(s.black, 15.0);
    assert_eq!(s.white, 10.5);
    assert!(s.diff > 0.0);
}

#[test]
fn capture_swings_the_area_score() {
    let before = Board::from_layout(&[".X.", "XOX", "..."]);
    let after = try_play(&before, 1, 2, Color::Black, None).unwrap().board;

    // Before the capture the center point is White's stone; afterwards the
    // whole board is Black's by area.
    let s_before = score_area(&before, 0.0);
    let s_after = score_area(&after, 0.0);
    assert_eq!(s_before.detail.white_stones, 1);
    assert_eq!(s_after.detail.white_stones, 0);
    assert_eq!(s_after.black, 9.0);
}
