//! Troop actions: the move-generation rules.
//!
//! Each action is a relative offset plus a kind. The three kinds form a
//! closed set, matched exhaustively here, so adding a new kind is a
//! compile-time-checked exercise:
//!
//! - [`TroopAction::Shift`]: exactly one step in the offset's direction;
//!   steps onto open ground or captures by stepping onto an enemy.
//! - [`TroopAction::Slide`]: repeats the step outward, emitting one move
//!   per open cell until something blocks the run.
//! - [`TroopAction::Strike`]: captures at the offset cell without moving.
//!
//! Actions are stateless: `moves_from` reads the game state's legality
//! predicates and never mutates anything. Offsets are authored from BLUE's
//! point of view and mirrored for ORANGE by the geometry layer.

use crate::game::{GameState, Move, PlayingSide};
use crate::geometry::{BoardPos, Offset, TilePos};

/// A single move-generation rule of a troop face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TroopAction {
    /// One step to the offset cell; may step or capture into it.
    Shift(Offset),
    /// Repeated steps along the offset direction until blocked.
    Slide(Offset),
    /// A standing capture at the offset cell.
    Strike(Offset),
}

impl TroopAction {
    /// A shift action with the given offset components.
    #[must_use]
    pub const fn shift(x: i32, y: i32) -> Self {
        TroopAction::Shift(Offset::new(x, y))
    }

    /// A slide action with the given offset components.
    #[must_use]
    pub const fn slide(x: i32, y: i32) -> Self {
        TroopAction::Slide(Offset::new(x, y))
    }

    /// A strike action with the given offset components.
    #[must_use]
    pub const fn strike(x: i32, y: i32) -> Self {
        TroopAction::Strike(Offset::new(x, y))
    }

    /// The action's relative offset.
    #[must_use]
    pub const fn offset(self) -> Offset {
        match self {
            TroopAction::Shift(offset)
            | TroopAction::Slide(offset)
            | TroopAction::Strike(offset) => offset,
        }
    }

    /// Enumerate the moves this action allows from `origin` for a troop of
    /// `side`, given the current state.
    #[must_use]
    pub fn moves_from(self, origin: BoardPos, side: PlayingSide, state: &GameState) -> Vec<Move> {
        let mut moves = Vec::new();

        match self {
            TroopAction::Shift(offset) => {
                if let TilePos::OnBoard(target) = origin.step_by_playing_side(offset, side) {
                    if state.can_step(origin.into(), target.into()) {
                        moves.push(Move::StepOnly { origin, target });
                    } else if state.can_capture(origin.into(), target.into()) {
                        moves.push(Move::StepAndCapture { origin, target });
                    }
                }
            }
            TroopAction::Slide(offset) => {
                let first = origin.step_by_playing_side(offset, side);

                let mut current = first;
                while let TilePos::OnBoard(cell) = current {
                    if !state.can_step(origin.into(), cell.into()) {
                        break;
                    }
                    moves.push(Move::StepOnly {
                        origin,
                        target: cell,
                    });
                    current = cell.step_by_playing_side(offset, side);
                }

                // The capture test runs against the first cell in the
                // direction of travel, not the cell where the run stopped.
                if let TilePos::OnBoard(target) = first {
                    if state.can_capture(origin.into(), target.into()) {
                        moves.push(Move::StepAndCapture { origin, target });
                    }
                }
            }
            TroopAction::Strike(offset) => {
                if let TilePos::OnBoard(target) = origin.step_by_playing_side(offset, side) {
                    if state.can_capture(origin.into(), target.into()) {
                        moves.push(Move::CaptureOnly { origin, target });
                    }
                }
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_accessor() {
        assert_eq!(TroopAction::shift(1, 0).offset(), Offset::new(1, 0));
        assert_eq!(TroopAction::slide(0, -1).offset(), Offset::new(0, -1));
        assert_eq!(TroopAction::strike(-1, 2).offset(), Offset::new(-1, 2));
    }

    #[test]
    fn test_constructors_distinct() {
        assert_ne!(TroopAction::shift(1, 0), TroopAction::slide(1, 0));
        assert_ne!(TroopAction::slide(1, 0), TroopAction::strike(1, 0));
    }
}
