//! # banneret
//!
//! Rules engine for a two-player tactical board game on a square grid.
//!
//! Two sides, BLUE and ORANGE, alternate turns placing and moving typed
//! troop pieces. Each side's first placement is its leader; the next two
//! placements are guards that must stand next to the leader. Capturing the
//! enemy leader wins the game.
//!
//! ## Design Principles
//!
//! 1. **Persistent State**: The whole state graph is immutable. Every
//!    mutator returns a new [`GameState`] built over `im` persistent data
//!    structures, so snapshots are O(1) and a failed call leaves nothing
//!    half-changed.
//!
//! 2. **Closed Rule Sets**: Troop actions (shift/slide/strike) and tiles
//!    (terrain or troop) are enums matched exhaustively. Adding an action
//!    or tile kind is a compile-time-checked exercise.
//!
//! 3. **Layered Legality**: Read-only `can_*` predicates decide legality;
//!    mutators re-validate and fail with a [`RulesError`] rather than trust
//!    their caller. Hosts (GUI, CLI, network peer) compose on top of the
//!    pure `(state, move) -> state` contract without the engine knowing.
//!
//! ## Modules
//!
//! - `geometry`: positions, offsets, the off-board value
//! - `board`: the terrain grid
//! - `troops`: troop definitions, the placement ledger, the catalog
//! - `actions`: per-piece move-generation rules
//! - `game`: armies, moves, and the root state machine
//! - `error`: the rule-violation taxonomy
//!
//! ## Example
//!
//! ```
//! use banneret::board::Board;
//! use banneret::game::{GameResult, PlayingSide};
//! use banneret::troops::StandardSetup;
//!
//! let board = Board::new(4);
//! let factory = board.position_factory();
//! let state = StandardSetup::new().start_state(board);
//!
//! // BLUE opens by placing its leader on the home row.
//! let state = state.place_from_stack(factory.parse("a1")).unwrap();
//!
//! assert_eq!(state.side_on_turn(), PlayingSide::Orange);
//! assert_eq!(state.result(), GameResult::InPlay);
//! ```

pub mod actions;
pub mod board;
pub mod error;
pub mod game;
pub mod geometry;
pub mod troops;

// Re-export commonly used types
pub use crate::actions::TroopAction;
pub use crate::board::{Board, Terrain};
pub use crate::error::RulesError;
pub use crate::game::{Army, GameResult, GameState, Move, PlayingSide, Tile};
pub use crate::geometry::{BoardPos, Offset, PositionFactory, TilePos};
pub use crate::troops::{
    BoardTroops, StandardSetup, Troop, TroopFace, TroopRegistry, TroopTile,
};
