//! Board positions and the off-board variant.
//!
//! ## BoardPos
//!
//! A coordinate inside the `[0, dimension)` square of a specific board.
//! `i` counts columns (displayed as `a`, `b`, ...) and `j` counts rows
//! (displayed 1-based), so the bottom-left cell prints as `a1`.
//!
//! ## TilePos
//!
//! Either an on-board position or the distinguished off-board value. Every
//! coordinate step that would leave the grid yields [`TilePos::OffBoard`],
//! and stepping off-board further is an error: off-board is terminal and
//! supports nothing beyond equality checks.

use serde::ser::Serializer;
use serde::Serialize;

use crate::error::RulesError;
use crate::game::PlayingSide;

use super::offset::Offset;

/// A position inside the bounded square grid of a board.
///
/// Serializes as its display string, e.g. `"a1"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoardPos {
    dimension: i32,
    i: i32,
    j: i32,
}

impl BoardPos {
    /// Create a position if `(i, j)` lies inside the `[0, dimension)` square.
    #[must_use]
    pub fn new(dimension: i32, i: i32, j: i32) -> Option<Self> {
        if (0..dimension).contains(&i) && (0..dimension).contains(&j) {
            Some(Self { dimension, i, j })
        } else {
            None
        }
    }

    /// The dimension of the board this position belongs to.
    #[must_use]
    pub const fn dimension(self) -> i32 {
        self.dimension
    }

    /// The column index (0-based).
    #[must_use]
    pub const fn i(self) -> i32 {
        self.i
    }

    /// The row index (0-based).
    #[must_use]
    pub const fn j(self) -> i32 {
        self.j
    }

    /// The display column character, `'a'` for column 0.
    #[must_use]
    pub fn column(self) -> char {
        char::from(b'a' + self.i as u8)
    }

    /// The display row number, `1` for row 0.
    #[must_use]
    pub const fn row(self) -> i32 {
        self.j + 1
    }

    /// Step by explicit column and row deltas.
    ///
    /// Returns [`TilePos::OffBoard`] when the result leaves the grid.
    #[must_use]
    pub fn step_by(self, column_step: i32, row_step: i32) -> TilePos {
        match Self::new(self.dimension, self.i + column_step, self.j + row_step) {
            Some(pos) => TilePos::OnBoard(pos),
            None => TilePos::OffBoard,
        }
    }

    /// Step by an offset.
    #[must_use]
    pub fn step(self, offset: Offset) -> TilePos {
        self.step_by(offset.x, offset.y)
    }

    /// Step by an offset as seen from the given side.
    ///
    /// BLUE uses the offset as authored; ORANGE uses it with the vertical
    /// component negated, so one action list serves both sides.
    #[must_use]
    pub fn step_by_playing_side(self, offset: Offset, side: PlayingSide) -> TilePos {
        match side {
            PlayingSide::Blue => self.step(offset),
            PlayingSide::Orange => self.step(offset.y_flipped()),
        }
    }

    /// The up-to-four orthogonally adjacent on-board positions.
    #[must_use]
    pub fn neighbours(self) -> Vec<BoardPos> {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(|(di, dj)| match self.step_by(di, dj) {
                TilePos::OnBoard(pos) => Some(pos),
                TilePos::OffBoard => None,
            })
            .collect()
    }

    /// Whether this position is orthogonally adjacent to `pos`.
    ///
    /// Always false when `pos` is off-board.
    #[must_use]
    pub fn is_next_to(self, pos: impl Into<TilePos>) -> bool {
        let TilePos::OnBoard(other) = pos.into() else {
            return false;
        };

        (self.i == other.i && (self.j - other.j).abs() == 1)
            || (self.j == other.j && (self.i - other.i).abs() == 1)
    }

    /// Whether this position has exactly the given indices.
    #[must_use]
    pub const fn equals_to(self, i: i32, j: i32) -> bool {
        self.i == i && self.j == j
    }
}

impl std::fmt::Display for BoardPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column(), self.row())
    }
}

impl Serialize for BoardPos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An on-board position or the off-board value.
///
/// Serializes as the inner position's display string, or the literal string
/// `"off-board"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TilePos {
    /// A concrete position on the board.
    OnBoard(BoardPos),
    /// The terminal off-board value.
    OffBoard,
}

impl TilePos {
    /// Whether this is the off-board value.
    #[must_use]
    pub const fn is_off_board(self) -> bool {
        matches!(self, TilePos::OffBoard)
    }

    /// The concrete board position, or an error when off-board.
    pub fn board_pos(self) -> Result<BoardPos, RulesError> {
        match self {
            TilePos::OnBoard(pos) => Ok(pos),
            TilePos::OffBoard => Err(RulesError::OffBoard),
        }
    }

    /// The column index, or an error when off-board.
    pub fn i(self) -> Result<i32, RulesError> {
        Ok(self.board_pos()?.i())
    }

    /// The row index, or an error when off-board.
    pub fn j(self) -> Result<i32, RulesError> {
        Ok(self.board_pos()?.j())
    }

    /// The display column, or an error when off-board.
    pub fn column(self) -> Result<char, RulesError> {
        Ok(self.board_pos()?.column())
    }

    /// The display row, or an error when off-board.
    pub fn row(self) -> Result<i32, RulesError> {
        Ok(self.board_pos()?.row())
    }

    /// Step by an offset, or an error when off-board.
    pub fn step(self, offset: Offset) -> Result<TilePos, RulesError> {
        Ok(self.board_pos()?.step(offset))
    }

    /// Step by an offset as seen from a side, or an error when off-board.
    pub fn step_by_playing_side(
        self,
        offset: Offset,
        side: PlayingSide,
    ) -> Result<TilePos, RulesError> {
        Ok(self.board_pos()?.step_by_playing_side(offset, side))
    }

    /// The orthogonally adjacent positions, or an error when off-board.
    pub fn neighbours(self) -> Result<Vec<BoardPos>, RulesError> {
        Ok(self.board_pos()?.neighbours())
    }

    /// Whether this position is orthogonally adjacent to `pos`.
    ///
    /// Always false when either side of the comparison is off-board.
    #[must_use]
    pub fn is_next_to(self, pos: impl Into<TilePos>) -> bool {
        match self {
            TilePos::OnBoard(origin) => origin.is_next_to(pos),
            TilePos::OffBoard => false,
        }
    }
}

impl From<BoardPos> for TilePos {
    fn from(pos: BoardPos) -> Self {
        TilePos::OnBoard(pos)
    }
}

impl std::fmt::Display for TilePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TilePos::OnBoard(pos) => pos.fmt(f),
            TilePos::OffBoard => write!(f, "off-board"),
        }
    }
}

impl Serialize for TilePos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
