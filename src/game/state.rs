//! The root game state.
//!
//! `GameState` owns every legality check and every transition. It is a
//! persistent value: mutators return a brand-new state and leave the
//! original untouched, so the chain of states a game produces is its
//! history, and a failed call never leaves partial mutation behind.

use std::sync::Arc;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use tracing::debug;

use crate::board::{Board, Terrain};
use crate::error::RulesError;
use crate::geometry::{BoardPos, TilePos};
use crate::troops::TroopTile;

use super::army::Army;
use super::moves::Move;
use super::result::GameResult;
use super::side::PlayingSide;

/// What occupies a board cell: a troop of either side, or bare terrain.
///
/// This is the uniform view the move-generation code works against; the
/// three-tier lookup in [`GameState::tile_at`] produces it.
#[derive(Clone, Copy, Debug)]
pub enum Tile<'a> {
    /// The cell's terrain; no troop stands here.
    Board(Terrain),
    /// A troop of either side stands here.
    Troop(&'a TroopTile),
}

impl<'a> Tile<'a> {
    /// Whether a troop may step onto this cell.
    #[must_use]
    pub fn can_step_on(&self) -> bool {
        match self {
            Tile::Board(terrain) => terrain.can_step_on(),
            Tile::Troop(_) => false,
        }
    }

    /// Whether a troop stands on this cell.
    #[must_use]
    pub fn has_troop(&self) -> bool {
        matches!(self, Tile::Troop(_))
    }

    /// The troop on this cell, if any.
    #[must_use]
    pub fn troop(&self) -> Option<&'a TroopTile> {
        match *self {
            Tile::Board(_) => None,
            Tile::Troop(tile) => Some(tile),
        }
    }
}

/// The complete state of a game.
///
/// Serializes as `{"result", "board", "blueArmy", "orangeArmy"}`.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    blue_army: Army,
    orange_army: Army,
    side_on_turn: PlayingSide,
    result: GameResult,
}

impl GameState {
    /// Start a new game: BLUE on turn, result in play.
    #[must_use]
    pub fn new(board: Board, blue_army: Army, orange_army: Army) -> Self {
        Self {
            board,
            blue_army,
            orange_army,
            side_on_turn: PlayingSide::Blue,
            result: GameResult::InPlay,
        }
    }

    /// The terrain grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side currently permitted to act.
    #[must_use]
    pub fn side_on_turn(&self) -> PlayingSide {
        self.side_on_turn
    }

    /// The current result.
    #[must_use]
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// The army of the given side.
    #[must_use]
    pub fn army(&self, side: PlayingSide) -> &Army {
        match side {
            PlayingSide::Blue => &self.blue_army,
            PlayingSide::Orange => &self.orange_army,
        }
    }

    /// The army of the side on turn.
    #[must_use]
    pub fn army_on_turn(&self) -> &Army {
        self.army(self.side_on_turn)
    }

    /// The army of the side not on turn.
    #[must_use]
    pub fn army_not_on_turn(&self) -> &Army {
        self.army(self.side_on_turn.opposite())
    }

    /// What occupies the cell at `pos`: the BLUE troop there, else the
    /// ORANGE troop there, else the terrain.
    #[must_use]
    pub fn tile_at(&self, pos: BoardPos) -> Tile<'_> {
        if let Some(tile) = self.blue_army.board_troops().at(pos) {
            return Tile::Troop(tile);
        }
        if let Some(tile) = self.orange_army.board_troops().at(pos) {
            return Tile::Troop(tile);
        }
        Tile::Board(self.board.at(pos))
    }

    /// All legal moves for whatever occupies the cell at `pos`.
    ///
    /// Terrain cells produce nothing; a troop delegates to its active
    /// action list, whose legality checks already filter out pieces that
    /// may not act.
    #[must_use]
    pub fn legal_moves(&self, pos: BoardPos) -> Vec<Move> {
        match self.tile_at(pos) {
            Tile::Troop(tile) => tile.moves_from(pos, self),
            Tile::Board(_) => Vec::new(),
        }
    }

    // === Legality predicates ===

    fn can_step_from(&self, origin: TilePos) -> bool {
        let TilePos::OnBoard(origin) = origin else {
            return false;
        };
        if self.result != GameResult::InPlay {
            return false;
        }

        let troops = self.army_on_turn().board_troops();

        troops.at(origin).is_some() && troops.is_leader_placed() && !troops.is_placing_guards()
    }

    fn can_step_to(&self, target: TilePos) -> bool {
        let TilePos::OnBoard(target) = target else {
            return false;
        };
        if self.result != GameResult::InPlay {
            return false;
        }

        self.tile_at(target).can_step_on()
    }

    fn can_capture_on(&self, target: TilePos) -> bool {
        if target.is_off_board() || self.result != GameResult::InPlay {
            return false;
        }

        self.army_not_on_turn().board_troops().at(target).is_some()
    }

    /// Whether the troop at `origin` may step onto the open cell `target`.
    #[must_use]
    pub fn can_step(&self, origin: TilePos, target: TilePos) -> bool {
        self.can_step_from(origin) && self.can_step_to(target)
    }

    /// Whether the troop at `origin` may capture the enemy at `target`.
    #[must_use]
    pub fn can_capture(&self, origin: TilePos, target: TilePos) -> bool {
        self.can_step_from(origin) && self.can_capture_on(target)
    }

    /// Whether the side on turn may place the front of its stack onto
    /// `target`.
    ///
    /// Exactly one of three placement regimes applies: the leader goes on
    /// the mover's home row; guards go next to the leader; and afterwards
    /// every placement goes next to some already-placed troop of the same
    /// side.
    #[must_use]
    pub fn can_place_from_stack(&self, target: TilePos) -> bool {
        let TilePos::OnBoard(pos) = target else {
            return false;
        };
        if self.result != GameResult::InPlay
            || self.army_on_turn().stack().is_empty()
            || !self.can_step_to(target)
        {
            return false;
        }

        let troops = self.army_on_turn().board_troops();

        if !troops.is_leader_placed() {
            return match self.side_on_turn {
                PlayingSide::Blue => pos.row() == 1,
                PlayingSide::Orange => pos.row() == self.board.dimension(),
            };
        }

        if troops.is_placing_guards() {
            return pos.is_next_to(troops.leader_position());
        }

        troops.troop_positions().any(|placed| pos.is_next_to(placed))
    }

    // === Mutators ===

    /// Step a troop from `origin` to `target`.
    ///
    /// Fails with [`RulesError::IllegalMove`] unless [`GameState::can_step`]
    /// holds.
    pub fn step_only(&self, origin: BoardPos, target: BoardPos) -> Result<Self, RulesError> {
        if !self.can_step(origin.into(), target.into()) {
            return Err(RulesError::IllegalMove);
        }

        debug!(side = %self.side_on_turn, %origin, %target, "step");

        Ok(self.advanced(
            self.army_not_on_turn().clone(),
            self.army_on_turn().troop_step(origin, target)?,
            GameResult::InPlay,
        ))
    }

    /// Step a troop from `origin` onto `target`, capturing the enemy troop
    /// there.
    ///
    /// Capturing the cell the enemy leader stands on wins the game.
    /// Fails with [`RulesError::IllegalMove`] unless
    /// [`GameState::can_capture`] holds.
    pub fn step_and_capture(&self, origin: BoardPos, target: BoardPos) -> Result<Self, RulesError> {
        if !self.can_capture(origin.into(), target.into()) {
            return Err(RulesError::IllegalMove);
        }

        let defender = self.army_not_on_turn();
        let captured = defender
            .board_troops()
            .at(target)
            .ok_or(RulesError::NoTroop)?
            .troop()
            .clone();

        let result = self.result_after_capture(target);
        debug!(side = %self.side_on_turn, %origin, %target, ?result, "step and capture");

        Ok(self.advanced(
            defender.remove_troop(target)?,
            self.army_on_turn()
                .troop_step(origin, target)?
                .capture(captured),
            result,
        ))
    }

    /// Capture the enemy troop at `target` without moving; the troop at
    /// `origin` flips in place.
    ///
    /// Capturing the cell the enemy leader stands on wins the game.
    /// Fails with [`RulesError::IllegalMove`] unless
    /// [`GameState::can_capture`] holds.
    pub fn capture_only(&self, origin: BoardPos, target: BoardPos) -> Result<Self, RulesError> {
        if !self.can_capture(origin.into(), target.into()) {
            return Err(RulesError::IllegalMove);
        }

        let defender = self.army_not_on_turn();
        let captured = defender
            .board_troops()
            .at(target)
            .ok_or(RulesError::NoTroop)?
            .troop()
            .clone();

        let result = self.result_after_capture(target);
        debug!(side = %self.side_on_turn, %origin, %target, ?result, "capture");

        Ok(self.advanced(
            defender.remove_troop(target)?,
            self.army_on_turn().troop_flip(origin)?.capture(captured),
            result,
        ))
    }

    /// Place the front of the mover's stack onto `target`.
    ///
    /// Fails with [`RulesError::IllegalMove`] unless
    /// [`GameState::can_place_from_stack`] holds.
    pub fn place_from_stack(&self, target: BoardPos) -> Result<Self, RulesError> {
        if !self.can_place_from_stack(target.into()) {
            return Err(RulesError::IllegalMove);
        }

        debug!(side = %self.side_on_turn, %target, "place from stack");

        Ok(self.advanced(
            self.army_not_on_turn().clone(),
            self.army_on_turn().place_from_stack(target)?,
            GameResult::InPlay,
        ))
    }

    /// The side on turn gives up; the opponent wins.
    #[must_use]
    pub fn resign(&self) -> Self {
        debug!(side = %self.side_on_turn, "resign");

        self.advanced(
            self.army_not_on_turn().clone(),
            self.army_on_turn().clone(),
            GameResult::Victory,
        )
    }

    /// End the game without a winner.
    #[must_use]
    pub fn draw(&self) -> Self {
        debug!(side = %self.side_on_turn, "draw");

        self.advanced(
            self.army_on_turn().clone(),
            self.army_not_on_turn().clone(),
            GameResult::Draw,
        )
    }

    fn result_after_capture(&self, target: BoardPos) -> GameResult {
        if self.army_not_on_turn().board_troops().leader_position() == TilePos::OnBoard(target) {
            GameResult::Victory
        } else {
            GameResult::InPlay
        }
    }

    /// Assemble the successor state. `next_on_turn` is the army that will
    /// act next; BLUE/ORANGE field ordering is preserved regardless of who
    /// just acted.
    fn advanced(&self, next_on_turn: Army, next_not_on_turn: Army, result: GameResult) -> Self {
        let (blue_army, orange_army, side_on_turn) = match next_on_turn.side() {
            PlayingSide::Blue => (next_on_turn, next_not_on_turn, PlayingSide::Blue),
            PlayingSide::Orange => (next_not_on_turn, next_on_turn, PlayingSide::Orange),
        };

        Self {
            board: self.board.clone(),
            blue_army,
            orange_army,
            side_on_turn,
            result,
        }
    }

    /// Render the state as its JSON export format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for GameState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("GameState", 4)?;
        state.serialize_field("result", &self.result)?;
        state.serialize_field("board", &self.board)?;
        state.serialize_field("blueArmy", &self.blue_army)?;
        state.serialize_field("orangeArmy", &self.orange_army)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::troops::Troop;

    fn fresh_state() -> GameState {
        let board = Board::new(4);
        let stack = || vec![Arc::new(Troop::new("Warlord", &[], &[]))];

        GameState::new(
            board,
            Army::new(PlayingSide::Blue, stack()),
            Army::new(PlayingSide::Orange, stack()),
        )
    }

    #[test]
    fn test_new_game_defaults() {
        let state = fresh_state();

        assert_eq!(state.side_on_turn(), PlayingSide::Blue);
        assert_eq!(state.result(), GameResult::InPlay);
        assert_eq!(state.army_on_turn().side(), PlayingSide::Blue);
        assert_eq!(state.army_not_on_turn().side(), PlayingSide::Orange);
    }

    #[test]
    fn test_tile_at_prefers_troops() {
        let state = fresh_state();
        let f = state.board().position_factory();
        let a1 = f.parse("a1");

        assert!(!state.tile_at(a1).has_troop());

        let state = state.place_from_stack(a1).unwrap();

        let tile = state.tile_at(a1);
        assert!(tile.has_troop());
        assert!(!tile.can_step_on());
        assert_eq!(tile.troop().unwrap().side(), PlayingSide::Blue);
    }

    #[test]
    fn test_place_flips_turn() {
        let state = fresh_state();
        let f = state.board().position_factory();

        let state = state.place_from_stack(f.parse("a1")).unwrap();
        assert_eq!(state.side_on_turn(), PlayingSide::Orange);

        let state = state.place_from_stack(f.parse("d4")).unwrap();
        assert_eq!(state.side_on_turn(), PlayingSide::Blue);
    }

    #[test]
    fn test_leader_placement_restricted_to_home_row() {
        let state = fresh_state();
        let f = state.board().position_factory();

        // BLUE's home row is row 1.
        assert!(state.can_place_from_stack(f.parse("a1").into()));
        assert!(state.can_place_from_stack(f.parse("d1").into()));
        assert!(!state.can_place_from_stack(f.parse("a2").into()));
        assert_eq!(
            state.place_from_stack(f.parse("b3")).unwrap_err(),
            RulesError::IllegalMove
        );

        // ORANGE's home row is the far row.
        let state = state.place_from_stack(f.parse("a1")).unwrap();
        assert!(state.can_place_from_stack(f.parse("c4").into()));
        assert!(!state.can_place_from_stack(f.parse("c3").into()));
    }

    #[test]
    fn test_mountain_blocks_placement() {
        let board = Board::new(4);
        let f = board.position_factory();
        let board = board.with_tiles(&[(f.parse("b1"), Terrain::Mountain)]);
        let stack = vec![Arc::new(Troop::new("Warlord", &[], &[]))];

        let state = GameState::new(
            board,
            Army::new(PlayingSide::Blue, stack.clone()),
            Army::new(PlayingSide::Orange, stack),
        );

        assert!(!state.can_place_from_stack(f.parse("b1").into()));
        assert!(state.can_place_from_stack(f.parse("a1").into()));
    }

    #[test]
    fn test_resign_awards_victory_and_flips_turn() {
        let state = fresh_state();

        let resigned = state.resign();

        assert_eq!(resigned.result(), GameResult::Victory);
        assert_eq!(resigned.side_on_turn(), PlayingSide::Orange);
        // Original untouched.
        assert_eq!(state.result(), GameResult::InPlay);
    }

    #[test]
    fn test_draw_is_terminal() {
        let state = fresh_state();
        let f = state.board().position_factory();

        let drawn = state.draw();

        assert_eq!(drawn.result(), GameResult::Draw);
        assert_eq!(drawn.side_on_turn(), PlayingSide::Blue);
        assert!(!drawn.can_place_from_stack(f.parse("a1").into()));
        assert_eq!(
            drawn.place_from_stack(f.parse("a1")).unwrap_err(),
            RulesError::IllegalMove
        );
    }

    #[test]
    fn test_off_board_predicates_false() {
        let state = fresh_state();

        assert!(!state.can_step(TilePos::OffBoard, TilePos::OffBoard));
        assert!(!state.can_capture(TilePos::OffBoard, TilePos::OffBoard));
        assert!(!state.can_place_from_stack(TilePos::OffBoard));
    }
}
