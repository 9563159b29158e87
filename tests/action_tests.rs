//! Move-generation tests for the three action kinds.
//!
//! Each test builds a finished placement phase with fixture troops whose
//! action lists isolate one rule, then inspects the moves the engine
//! generates from a cell.
//!
//! The fixture layout after placement, BLUE on turn:
//!
//! ```text
//!   4 | G1  Ld  Ex  .        Ld = leader, G = guard, Ex = extra
//!   3 | P4  G2  .   .        ORANGE holds row 4 and b3
//!   2 | .   .   .   .        BLUE holds a1..a3 and b1
//!   1 | Ld  G2  .   .
//!     +----------------
//!       a   b   c   d
//! ```

use std::sync::Arc;

use banneret::board::{Board, Terrain};
use banneret::game::{Army, GameState, Move, PlayingSide};
use banneret::geometry::PositionFactory;
use banneret::troops::Troop;
use banneret::TroopAction;

fn troop(name: &str, avers: &[TroopAction]) -> Arc<Troop> {
    Arc::new(Troop::new(name, avers, &[]))
}

fn inert(name: &str) -> Arc<Troop> {
    troop(name, &[])
}

/// Play the fixed placement sequence
/// B a1, O b4, B a2, O a4, B b1, O b3, B a3, O c4
/// on the given board, leaving BLUE on turn with the guard phases done.
fn fixture(
    board: Board,
    blue: Vec<Arc<Troop>>,
    orange: Vec<Arc<Troop>>,
) -> (PositionFactory, GameState) {
    let f = board.position_factory();
    let state = GameState::new(
        board,
        Army::new(PlayingSide::Blue, blue),
        Army::new(PlayingSide::Orange, orange),
    );

    let state = ["a1", "b4", "a2", "a4", "b1", "b3", "a3", "c4"]
        .iter()
        .fold(state, |state, pos| {
            state
                .place_from_stack(f.parse(pos))
                .unwrap_or_else(|e| panic!("placement on {pos} failed: {e}"))
        });

    (f, state)
}

/// Armies whose fourth BLUE troop (placed on a3) carries the actions under
/// test; everything else is inert.
fn default_armies(blue_extra: Arc<Troop>) -> (Vec<Arc<Troop>>, Vec<Arc<Troop>>) {
    (
        vec![inert("Leader"), inert("G1"), inert("G2"), blue_extra],
        vec![inert("Leader"), inert("G1"), inert("G2"), inert("Extra")],
    )
}

// === Shift ===

/// A shift onto open ground yields a single step move.
#[test]
fn test_shift_step() {
    let (blue, orange) = default_armies(troop("Piece", &[TroopAction::shift(1, -1)]));
    let (f, state) = fixture(Board::new(4), blue, orange);

    // The Piece on a3 steps onto the open b2.
    let moves = state.legal_moves(f.parse("a3"));

    assert_eq!(
        moves,
        [Move::StepOnly {
            origin: f.parse("a3"),
            target: f.parse("b2"),
        }]
    );
}

/// A shift onto an enemy yields a step-and-capture.
#[test]
fn test_shift_capture() {
    let (blue, orange) = default_armies(troop("Piece", &[TroopAction::shift(0, 1)]));
    let (f, state) = fixture(Board::new(4), blue, orange);

    // a4 holds an ORANGE guard.
    let moves = state.legal_moves(f.parse("a3"));

    assert_eq!(
        moves,
        [Move::StepAndCapture {
            origin: f.parse("a3"),
            target: f.parse("a4"),
        }]
    );
}

/// Shifts into a mountain, off the board, or onto an own troop yield
/// nothing.
#[test]
fn test_shift_blocked() {
    let board = Board::new(4);
    let f = board.position_factory();
    let board = board.with_tiles(&[(f.parse("b2"), Terrain::Mountain)]);

    let (blue, orange) = default_armies(troop(
        "Piece",
        &[
            TroopAction::shift(1, -1),
            TroopAction::shift(-1, 0),
            TroopAction::shift(0, -1),
        ],
    ));
    let (f, state) = fixture(board, blue, orange);

    // From a3: b2 is a mountain, the left shift leaves the board, and a2
    // holds an own troop.
    assert!(state.legal_moves(f.parse("a3")).is_empty());
}

/// ORANGE shifts are mirrored: the same action list authored for BLUE
/// moves the other way.
#[test]
fn test_shift_mirrored_for_orange() {
    let blue = vec![
        inert("Leader"),
        inert("G1"),
        inert("G2"),
        inert("Extra"),
        inert("Reserve"),
    ];
    let orange = vec![
        inert("Leader"),
        inert("G1"),
        troop("Piece", &[TroopAction::shift(0, 1)]),
        inert("Extra"),
    ];
    let (f, state) = fixture(Board::new(4), blue, orange);
    // Hand the turn to ORANGE with a neutral BLUE placement.
    let state = state.place_from_stack(f.parse("c1")).unwrap();

    // The ORANGE Piece on b3 moves "forward", which for ORANGE is down.
    let moves = state.legal_moves(f.parse("b3"));

    assert_eq!(
        moves,
        [Move::StepOnly {
            origin: f.parse("b3"),
            target: f.parse("b2"),
        }]
    );
}

// === Slide ===

/// A slide along an open rank emits one step per cell up to the edge.
#[test]
fn test_slide_open_run() {
    let blue = vec![
        inert("Leader"),
        inert("G1"),
        troop("Slider", &[TroopAction::slide(1, 0)]),
        inert("Extra"),
    ];
    let orange = vec![inert("Leader"), inert("G1"), inert("G2"), inert("Extra")];
    let (f, state) = fixture(Board::new(4), blue, orange);

    // The Slider is the second guard, on b1; c1 and d1 are open.
    let moves = state.legal_moves(f.parse("b1"));

    assert_eq!(
        moves,
        [
            Move::StepOnly {
                origin: f.parse("b1"),
                target: f.parse("c1"),
            },
            Move::StepOnly {
                origin: f.parse("b1"),
                target: f.parse("d1"),
            },
        ]
    );
}

/// A mountain stops a slide run.
#[test]
fn test_slide_stops_at_mountain() {
    let board = Board::new(4);
    let f = board.position_factory();
    let board = board.with_tiles(&[(f.parse("d1"), Terrain::Mountain)]);

    let blue = vec![
        inert("Leader"),
        inert("G1"),
        troop("Slider", &[TroopAction::slide(1, 0)]),
        inert("Extra"),
    ];
    let orange = vec![inert("Leader"), inert("G1"), inert("G2"), inert("Extra")];
    let (f, state) = fixture(board, blue, orange);

    let moves = state.legal_moves(f.parse("b1"));

    assert_eq!(
        moves,
        [Move::StepOnly {
            origin: f.parse("b1"),
            target: f.parse("c1"),
        }]
    );
}

/// An enemy on the first cell of a slide is captured by stepping onto it,
/// exactly like a shift.
#[test]
fn test_slide_captures_adjacent_enemy() {
    let (blue, orange) = default_armies(troop("Slider", &[TroopAction::slide(0, 1)]));
    let (f, state) = fixture(Board::new(4), blue, orange);

    // The Slider on a3 faces the ORANGE guard on a4 directly.
    let moves = state.legal_moves(f.parse("a3"));

    assert_eq!(
        moves,
        [Move::StepAndCapture {
            origin: f.parse("a3"),
            target: f.parse("a4"),
        }]
    );
}

/// An enemy further along the run is NOT captured: the capture test runs
/// against the first cell of the run, so the run just stops short.
#[test]
fn test_slide_does_not_capture_at_run_end() {
    let blue = vec![
        inert("Leader"),
        inert("G1"),
        troop("Slider", &[TroopAction::slide(0, 1)]),
        inert("Extra"),
    ];
    let orange = vec![inert("Leader"), inert("G1"), inert("G2"), inert("Extra")];
    let (f, state) = fixture(Board::new(4), blue, orange);

    // The Slider sits on b1; b2 is open, b3 holds an ORANGE guard. The
    // run emits b2 and stops; the first cell b2 holds no enemy, so no
    // capture is generated against b3.
    let moves = state.legal_moves(f.parse("b1"));

    assert_eq!(
        moves,
        [Move::StepOnly {
            origin: f.parse("b1"),
            target: f.parse("b2"),
        }]
    );
}

// === Strike ===

/// A strike with an enemy on the offset cell yields a standing capture.
#[test]
fn test_strike_hit() {
    let (blue, orange) = default_armies(troop("Striker", &[TroopAction::strike(0, 1)]));
    let (f, state) = fixture(Board::new(4), blue, orange);

    let moves = state.legal_moves(f.parse("a3"));

    assert_eq!(
        moves,
        [Move::CaptureOnly {
            origin: f.parse("a3"),
            target: f.parse("a4"),
        }]
    );
}

/// A strike with no enemy on the offset cell yields nothing, even when
/// the cell is open ground.
#[test]
fn test_strike_miss() {
    let (blue, orange) = default_armies(troop("Striker", &[TroopAction::strike(1, -1)]));
    let (f, state) = fixture(Board::new(4), blue, orange);

    // b2 is empty terrain: a strike is not a step.
    assert!(state.legal_moves(f.parse("a3")).is_empty());
}

// === Entry point ===

/// Terrain cells and enemy-held cells generate no moves for the side on
/// turn.
#[test]
fn test_legal_moves_only_for_own_troops() {
    let (blue, orange) = default_armies(troop("Piece", &[TroopAction::shift(1, -1)]));
    let orange = {
        let mut orange = orange;
        orange[3] = troop("Enemy", &[TroopAction::shift(1, 0)]);
        orange
    };
    let (f, state) = fixture(Board::new(4), blue, orange);

    // Empty terrain.
    assert!(state.legal_moves(f.parse("c2")).is_empty());
    // ORANGE troop while BLUE is on turn.
    assert!(state.legal_moves(f.parse("c4")).is_empty());
    // BLUE troop produces its move.
    assert_eq!(state.legal_moves(f.parse("a3")).len(), 1);
}

/// An action list with several actions concatenates their moves in order.
#[test]
fn test_action_lists_concatenate() {
    let (blue, orange) = default_armies(troop(
        "Piece",
        &[TroopAction::shift(1, -1), TroopAction::strike(0, 1)],
    ));
    let (f, state) = fixture(Board::new(4), blue, orange);

    let moves = state.legal_moves(f.parse("a3"));

    assert_eq!(
        moves,
        [
            Move::StepOnly {
                origin: f.parse("a3"),
                target: f.parse("b2"),
            },
            Move::CaptureOnly {
                origin: f.parse("a3"),
                target: f.parse("a4"),
            },
        ]
    );
}
