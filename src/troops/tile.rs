//! A placed troop.

use std::sync::Arc;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::game::{GameState, Move, PlayingSide};
use crate::geometry::BoardPos;

use super::face::TroopFace;
use super::troop::Troop;

/// One troop standing on the board: a definition bound to an owning side
/// and a face.
///
/// The definition is shared by reference; flipping or moving a piece never
/// copies it. Serializes as `{"troop": name, "side": ..., "face": ...}`.
#[derive(Clone, Debug, PartialEq)]
pub struct TroopTile {
    troop: Arc<Troop>,
    side: PlayingSide,
    face: TroopFace,
}

impl TroopTile {
    /// Create a placed troop.
    #[must_use]
    pub fn new(troop: Arc<Troop>, side: PlayingSide, face: TroopFace) -> Self {
        Self { troop, side, face }
    }

    /// The troop definition.
    #[must_use]
    pub fn troop(&self) -> &Arc<Troop> {
        &self.troop
    }

    /// The owning side.
    #[must_use]
    pub fn side(&self) -> PlayingSide {
        self.side
    }

    /// The face currently up.
    #[must_use]
    pub fn face(&self) -> TroopFace {
        self.face
    }

    /// The same piece with the opposite face up.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            troop: Arc::clone(&self.troop),
            side: self.side,
            face: self.face.flipped(),
        }
    }

    /// All moves this piece's active action list produces from `pos`.
    ///
    /// Delegates to each action in order; actions consult the state's
    /// legality predicates, so the result is empty whenever the piece is
    /// not allowed to act (wrong turn, guard phase, game over).
    #[must_use]
    pub fn moves_from(&self, pos: BoardPos, state: &GameState) -> Vec<Move> {
        self.troop
            .actions(self.face)
            .iter()
            .flat_map(|action| action.moves_from(pos, self.side, state))
            .collect()
    }
}

impl Serialize for TroopTile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TroopTile", 3)?;
        state.serialize_field("troop", &*self.troop)?;
        state.serialize_field("side", &self.side)?;
        state.serialize_field("face", &self.face)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flipped_keeps_identity() {
        let troop = Arc::new(Troop::new("Footman", &[], &[]));
        let tile = TroopTile::new(Arc::clone(&troop), PlayingSide::Blue, TroopFace::Avers);

        let flipped = tile.flipped();

        assert_eq!(flipped.face(), TroopFace::Revers);
        assert_eq!(flipped.side(), PlayingSide::Blue);
        assert!(Arc::ptr_eq(flipped.troop(), &troop));
        assert_eq!(tile.face(), TroopFace::Avers);
    }

    #[test]
    fn test_serialization() {
        let troop = Arc::new(Troop::new("Monk", &[], &[]));
        let tile = TroopTile::new(troop, PlayingSide::Orange, TroopFace::Revers);

        assert_eq!(
            serde_json::to_string(&tile).unwrap(),
            r#"{"troop":"Monk","side":"ORANGE","face":"REVERS"}"#
        );
    }
}
