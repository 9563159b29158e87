//! A side's complete forces.

use std::sync::Arc;

use im::Vector;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::error::RulesError;
use crate::geometry::BoardPos;
use crate::troops::{BoardTroops, Troop};

use super::side::PlayingSide;

/// Everything one side owns: troops on the board, the stack of troops
/// still waiting to be placed, and the pile of captured enemy troops.
///
/// The front of the stack is the next troop to be placed. Persistent like
/// the rest of the state: every operation returns a new army.
///
/// Serializes as `{"boardTroops", "stack", "captured"}`.
#[derive(Clone, Debug)]
pub struct Army {
    board_troops: BoardTroops,
    stack: Vector<Arc<Troop>>,
    captured: Vector<Arc<Troop>>,
}

impl Army {
    /// A fresh army for `side` with the given stack, nothing on the board,
    /// and nothing captured.
    #[must_use]
    pub fn new(side: PlayingSide, stack: Vec<Arc<Troop>>) -> Self {
        Self {
            board_troops: BoardTroops::new(side),
            stack: stack.into_iter().collect(),
            captured: Vector::new(),
        }
    }

    /// The side this army belongs to.
    #[must_use]
    pub fn side(&self) -> PlayingSide {
        self.board_troops.side()
    }

    /// The on-board troop ledger.
    #[must_use]
    pub fn board_troops(&self) -> &BoardTroops {
        &self.board_troops
    }

    /// The troops waiting to be placed, front first.
    #[must_use]
    pub fn stack(&self) -> &Vector<Arc<Troop>> {
        &self.stack
    }

    /// The captured enemy troops, in capture order.
    #[must_use]
    pub fn captured(&self) -> &Vector<Arc<Troop>> {
        &self.captured
    }

    /// Pop the front of the stack and place it on `target`.
    ///
    /// Fails when the stack is empty or the target is occupied.
    pub fn place_from_stack(&self, target: BoardPos) -> Result<Self, RulesError> {
        let troop = self.stack.front().ok_or(RulesError::EmptyStack)?;
        let board_troops = self.board_troops.place_troop(Arc::clone(troop), target)?;

        Ok(Self {
            board_troops,
            stack: self.stack.skip(1),
            captured: self.captured.clone(),
        })
    }

    /// Move a troop on the board. Delegates to [`BoardTroops::troop_step`].
    pub fn troop_step(&self, origin: BoardPos, target: BoardPos) -> Result<Self, RulesError> {
        Ok(Self {
            board_troops: self.board_troops.troop_step(origin, target)?,
            stack: self.stack.clone(),
            captured: self.captured.clone(),
        })
    }

    /// Flip a troop in place. Delegates to [`BoardTroops::troop_flip`].
    pub fn troop_flip(&self, origin: BoardPos) -> Result<Self, RulesError> {
        Ok(Self {
            board_troops: self.board_troops.troop_flip(origin)?,
            stack: self.stack.clone(),
            captured: self.captured.clone(),
        })
    }

    /// Remove a troop from the board. Delegates to
    /// [`BoardTroops::remove_troop`].
    pub fn remove_troop(&self, target: BoardPos) -> Result<Self, RulesError> {
        Ok(Self {
            board_troops: self.board_troops.remove_troop(target)?,
            stack: self.stack.clone(),
            captured: self.captured.clone(),
        })
    }

    /// Append a captured enemy troop to the pile.
    #[must_use]
    pub fn capture(&self, troop: Arc<Troop>) -> Self {
        let mut captured = self.captured.clone();
        captured.push_back(troop);

        Self {
            board_troops: self.board_troops.clone(),
            stack: self.stack.clone(),
            captured,
        }
    }
}

impl Serialize for Army {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let stack: Vec<&Troop> = self.stack.iter().map(Arc::as_ref).collect();
        let captured: Vec<&Troop> = self.captured.iter().map(Arc::as_ref).collect();

        let mut state = serializer.serialize_struct("Army", 3)?;
        state.serialize_field("boardTroops", &self.board_troops)?;
        state.serialize_field("stack", &stack)?;
        state.serialize_field("captured", &captured)?;
        state.end()
    }
}
