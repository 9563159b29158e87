//! Static troop definitions.
//!
//! A `Troop` holds the unchanging properties of a piece type: its name, a
//! pivot offset per face, and the ordered action list per face. Placement
//! data (owning side, current face, position) lives in
//! [`TroopTile`](super::tile::TroopTile) and
//! [`BoardTroops`](super::board_troops::BoardTroops).

use serde::ser::Serializer;
use serde::Serialize;
use smallvec::SmallVec;

use crate::actions::TroopAction;
use crate::geometry::Offset;

use super::face::TroopFace;

/// Static definition of a troop type.
///
/// Pivots are reserved for layout and display; the rules never consult
/// them. Serializes as the bare troop name.
///
/// ## Example
///
/// ```
/// use banneret::actions::TroopAction;
/// use banneret::geometry::Offset;
/// use banneret::troops::{Troop, TroopFace};
///
/// let scout = Troop::new(
///     "Scout",
///     &[TroopAction::shift(0, 1)],
///     &[TroopAction::shift(0, -1)],
/// )
/// .with_pivot(Offset::new(1, 2));
///
/// assert_eq!(scout.name(), "Scout");
/// assert_eq!(scout.pivot(TroopFace::Avers), Offset::new(1, 2));
/// assert_eq!(scout.actions(TroopFace::Avers).len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Troop {
    name: String,
    avers_pivot: Offset,
    revers_pivot: Offset,
    avers_actions: SmallVec<[TroopAction; 4]>,
    revers_actions: SmallVec<[TroopAction; 4]>,
}

impl Troop {
    /// Create a troop definition with the default pivot of `(1, 1)` on both
    /// faces.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        avers_actions: &[TroopAction],
        revers_actions: &[TroopAction],
    ) -> Self {
        Self {
            name: name.into(),
            avers_pivot: Offset::new(1, 1),
            revers_pivot: Offset::new(1, 1),
            avers_actions: SmallVec::from_slice(avers_actions),
            revers_actions: SmallVec::from_slice(revers_actions),
        }
    }

    /// Use the same pivot on both faces (builder pattern).
    #[must_use]
    pub fn with_pivot(self, pivot: Offset) -> Self {
        self.with_pivots(pivot, pivot)
    }

    /// Use distinct pivots per face (builder pattern).
    #[must_use]
    pub fn with_pivots(mut self, avers_pivot: Offset, revers_pivot: Offset) -> Self {
        self.avers_pivot = avers_pivot;
        self.revers_pivot = revers_pivot;
        self
    }

    /// The troop's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pivot offset for the given face.
    #[must_use]
    pub fn pivot(&self, face: TroopFace) -> Offset {
        match face {
            TroopFace::Avers => self.avers_pivot,
            TroopFace::Revers => self.revers_pivot,
        }
    }

    /// The ordered action list for the given face.
    #[must_use]
    pub fn actions(&self, face: TroopFace) -> &[TroopAction] {
        match face {
            TroopFace::Avers => &self.avers_actions,
            TroopFace::Revers => &self.revers_actions,
        }
    }
}

impl Serialize for Troop {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}
