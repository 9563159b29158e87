//! Troop definitions and the per-side placement ledger.
//!
//! A [`Troop`] is the static definition of a piece type: a name, a pivot
//! offset per face, and an ordered action list per face. A [`TroopTile`] is
//! one placed piece: a definition bound to a side and a face. [`BoardTroops`]
//! is a side's ledger of placed pieces, leader position, and guard-phase
//! progress. The [`TroopRegistry`] catalogs the definitions a game plays
//! with, and [`StandardSetup`] wires up the standard six-troop set.

pub mod board_troops;
pub mod catalog;
pub mod face;
pub mod tile;
pub mod troop;

pub use board_troops::BoardTroops;
pub use catalog::{StandardSetup, TroopRegistry};
pub use face::TroopFace;
pub use tile::TroopTile;
pub use troop::Troop;
