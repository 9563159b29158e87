//! Executable moves.

use crate::error::RulesError;
use crate::geometry::BoardPos;

use super::state::GameState;

/// One concrete, executable move.
///
/// A move carries only coordinates, never a reference to the state it was
/// generated against. [`Move::execute`] re-validates against whatever state
/// it is applied to, so a stale move fails cleanly instead of corrupting
/// anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Place the front of the mover's stack onto `target`.
    PlaceFromStack {
        /// The cell to place onto.
        target: BoardPos,
    },
    /// Step a troop from `origin` to the open cell `target`.
    StepOnly {
        /// The cell the troop stands on.
        origin: BoardPos,
        /// The cell it steps to.
        target: BoardPos,
    },
    /// Step a troop from `origin` onto `target`, capturing the enemy there.
    StepAndCapture {
        /// The cell the troop stands on.
        origin: BoardPos,
        /// The enemy-held cell it steps onto.
        target: BoardPos,
    },
    /// Capture the enemy at `target` without moving; the troop at `origin`
    /// flips in place.
    CaptureOnly {
        /// The cell the capturing troop stands on.
        origin: BoardPos,
        /// The enemy-held cell being struck.
        target: BoardPos,
    },
}

impl Move {
    /// The cell this move acts on.
    #[must_use]
    pub const fn target(self) -> BoardPos {
        match self {
            Move::PlaceFromStack { target }
            | Move::StepOnly { target, .. }
            | Move::StepAndCapture { target, .. }
            | Move::CaptureOnly { target, .. } => target,
        }
    }

    /// The cell this move starts from; placements have none.
    #[must_use]
    pub const fn origin(self) -> Option<BoardPos> {
        match self {
            Move::PlaceFromStack { .. } => None,
            Move::StepOnly { origin, .. }
            | Move::StepAndCapture { origin, .. }
            | Move::CaptureOnly { origin, .. } => Some(origin),
        }
    }

    /// Apply this move to a state, producing the successor state.
    pub fn execute(self, state: &GameState) -> Result<GameState, RulesError> {
        match self {
            Move::PlaceFromStack { target } => state.place_from_stack(target),
            Move::StepOnly { origin, target } => state.step_only(origin, target),
            Move::StepAndCapture { origin, target } => state.step_and_capture(origin, target),
            Move::CaptureOnly { origin, target } => state.capture_only(origin, target),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::PlaceFromStack { target } => write!(f, "PlaceFromStack{{{target}}}"),
            Move::StepOnly { origin, target } => write!(f, "StepOnly{{{origin}->{target}}}"),
            Move::StepAndCapture { origin, target } => {
                write!(f, "StepAndCapture{{{origin}->{target}}}")
            }
            Move::CaptureOnly { origin, target } => {
                write!(f, "CaptureOnly{{{origin}->{target}}}")
            }
        }
    }
}
