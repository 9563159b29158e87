//! Per-side placement ledger.

use std::collections::BTreeMap;
use std::sync::Arc;

use im::HashMap as ImHashMap;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::error::RulesError;
use crate::game::PlayingSide;
use crate::geometry::{BoardPos, TilePos};

use super::face::TroopFace;
use super::tile::TroopTile;
use super::troop::Troop;

/// One side's troops on the board.
///
/// Tracks the occupied cells, the leader's position, and the guard-phase
/// counter. The first troop ever placed becomes the leader; the next two
/// placements are the guards. Movement, flipping, and removal are all
/// forbidden until the leader is placed and both guards are down.
///
/// The ledger is persistent: every operation returns an updated copy that
/// shares structure with the original.
///
/// Serializes as `{"side", "leaderPosition", "guards", "troopMap"}` with
/// the troop map keyed by position display strings in lexicographic order.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardTroops {
    side: PlayingSide,
    troop_map: ImHashMap<BoardPos, TroopTile>,
    leader_position: TilePos,
    guards: u32,
}

impl BoardTroops {
    /// An empty ledger for the given side: no troops, no guards, leader
    /// off-board.
    #[must_use]
    pub fn new(side: PlayingSide) -> Self {
        Self {
            side,
            troop_map: ImHashMap::new(),
            leader_position: TilePos::OffBoard,
            guards: 0,
        }
    }

    /// The side this ledger belongs to.
    #[must_use]
    pub fn side(&self) -> PlayingSide {
        self.side
    }

    /// The troop at `pos`, if any. Off-board never holds a troop.
    #[must_use]
    pub fn at(&self, pos: impl Into<TilePos>) -> Option<&TroopTile> {
        match pos.into() {
            TilePos::OnBoard(pos) => self.troop_map.get(&pos),
            TilePos::OffBoard => None,
        }
    }

    /// The leader's position, or off-board while the leader is unplaced.
    #[must_use]
    pub fn leader_position(&self) -> TilePos {
        self.leader_position
    }

    /// How many guards have been placed (0..=2).
    #[must_use]
    pub fn guards(&self) -> u32 {
        self.guards
    }

    /// Whether the leader stands on the board.
    #[must_use]
    pub fn is_leader_placed(&self) -> bool {
        !self.leader_position.is_off_board()
    }

    /// Whether this side is still in its guard phase.
    ///
    /// True between the leader's placement and the second guard's.
    #[must_use]
    pub fn is_placing_guards(&self) -> bool {
        self.is_leader_placed() && self.guards < 2
    }

    /// The number of troops on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.troop_map.len()
    }

    /// Whether no troops are on the board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.troop_map.is_empty()
    }

    /// Iterate over the occupied positions.
    pub fn troop_positions(&self) -> impl Iterator<Item = BoardPos> + '_ {
        self.troop_map.keys().copied()
    }

    /// Place a troop avers-up on `target`.
    ///
    /// The first placement becomes the leader, whichever troop it is. While
    /// the guard phase runs, each placement advances the guard counter.
    /// Fails if `target` is already occupied.
    pub fn place_troop(&self, troop: Arc<Troop>, target: BoardPos) -> Result<Self, RulesError> {
        if self.at(target).is_some() {
            return Err(RulesError::TargetOccupied);
        }

        let tile = TroopTile::new(troop, self.side, TroopFace::Avers);

        Ok(Self {
            side: self.side,
            troop_map: self.troop_map.update(target, tile),
            leader_position: if self.is_leader_placed() {
                self.leader_position
            } else {
                TilePos::OnBoard(target)
            },
            guards: if self.is_placing_guards() {
                self.guards + 1
            } else {
                self.guards
            },
        })
    }

    /// Move the troop at `origin` to `target`, flipping its face.
    ///
    /// If the moved piece was the leader, the leader position follows it.
    /// Fails before the leader is placed, during the guard phase, when
    /// `origin` is empty, or when `target` is occupied.
    pub fn troop_step(&self, origin: BoardPos, target: BoardPos) -> Result<Self, RulesError> {
        self.ensure_movement_allowed()?;

        if self.at(origin).is_none() {
            return Err(RulesError::NoTroop);
        }
        if self.at(target).is_some() {
            return Err(RulesError::TargetOccupied);
        }

        let mut troop_map = self.troop_map.clone();
        let tile = troop_map.remove(&origin).ok_or(RulesError::NoTroop)?;
        troop_map.insert(target, tile.flipped());

        Ok(Self {
            side: self.side,
            troop_map,
            leader_position: if self.leader_position == TilePos::OnBoard(origin) {
                TilePos::OnBoard(target)
            } else {
                self.leader_position
            },
            guards: self.guards,
        })
    }

    /// Flip the troop at `origin` in place.
    ///
    /// Same preconditions as [`BoardTroops::troop_step`], minus the target.
    pub fn troop_flip(&self, origin: BoardPos) -> Result<Self, RulesError> {
        self.ensure_movement_allowed()?;

        let tile = self.at(origin).ok_or(RulesError::NoTroop)?;

        Ok(Self {
            side: self.side,
            troop_map: self.troop_map.update(origin, tile.flipped()),
            leader_position: self.leader_position,
            guards: self.guards,
        })
    }

    /// Remove the troop at `target`.
    ///
    /// If the removed piece was the leader, the leader position reverts to
    /// off-board. Same preconditions as [`BoardTroops::troop_step`].
    pub fn remove_troop(&self, target: BoardPos) -> Result<Self, RulesError> {
        self.ensure_movement_allowed()?;

        let mut troop_map = self.troop_map.clone();
        troop_map.remove(&target).ok_or(RulesError::NoTroop)?;

        Ok(Self {
            side: self.side,
            troop_map,
            leader_position: if self.leader_position == TilePos::OnBoard(target) {
                TilePos::OffBoard
            } else {
                self.leader_position
            },
            guards: self.guards,
        })
    }

    fn ensure_movement_allowed(&self) -> Result<(), RulesError> {
        if !self.is_leader_placed() {
            return Err(RulesError::LeaderNotPlaced);
        }
        if self.is_placing_guards() {
            return Err(RulesError::PlacingGuards);
        }
        Ok(())
    }
}

impl Serialize for BoardTroops {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Keyed by display string so the output is deterministic.
        let sorted: BTreeMap<String, &TroopTile> = self
            .troop_map
            .iter()
            .map(|(pos, tile)| (pos.to_string(), tile))
            .collect();

        let mut state = serializer.serialize_struct("BoardTroops", 4)?;
        state.serialize_field("side", &self.side)?;
        state.serialize_field("leaderPosition", &self.leader_position)?;
        state.serialize_field("guards", &self.guards)?;
        state.serialize_field("troopMap", &sorted)?;
        state.end()
    }
}
