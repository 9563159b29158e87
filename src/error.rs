//! Rule-violation errors.
//!
//! Every mutating operation in the engine either fully succeeds, returning a
//! new value, or fails with a [`RulesError`] and leaves the original value
//! untouched. There is no partial mutation to observe: all state is
//! persistent, so a failed call simply never produces a successor.
//!
//! Callers are expected to consult the corresponding `can_*` predicate before
//! invoking a mutator, which makes these errors assertion-like rather than
//! expected control flow.

use thiserror::Error;

/// An operation violated the game rules or was applied to a value that
/// cannot support it.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum RulesError {
    /// A positional accessor was invoked on the off-board position.
    ///
    /// Off-board is a terminal, non-navigable value: only equality checks
    /// are supported on it.
    #[error("operation not supported on the off-board position")]
    OffBoard,

    /// A placement or step targeted a cell that already holds a troop.
    #[error("target position is already occupied")]
    TargetOccupied,

    /// A step, flip, or removal addressed a cell with no troop on it.
    #[error("no troop at the given position")]
    NoTroop,

    /// A movement operation was attempted before the leader was placed.
    #[error("the leader has not been placed yet")]
    LeaderNotPlaced,

    /// A movement operation was attempted while guards are still being
    /// placed.
    #[error("guards are still being placed")]
    PlacingGuards,

    /// A placement from the stack was attempted with an empty stack.
    #[error("the troop stack is empty")]
    EmptyStack,

    /// A move was executed whose legality predicate does not hold against
    /// the state it was applied to.
    ///
    /// This also covers every attempt to mutate a game that is no longer in
    /// play: the predicates reject all moves once the result is terminal.
    #[error("move is not legal in this state")]
    IllegalMove,
}
