//! The board grid.

use im::Vector;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::geometry::{BoardPos, PositionFactory};

use super::terrain::Terrain;

/// A fixed square grid of terrain tiles.
///
/// Tiles are stored in a persistent vector, so cloning a board and deriving
/// modified copies via [`Board::with_tiles`] share structure instead of
/// copying the whole grid.
///
/// Serializes as `{"dimension": n, "tiles": [...]}` with tiles listed in
/// display order: `a1`, `b1`, ..., then `a2`, `b2`, and so on.
///
/// ## Example
///
/// ```
/// use banneret::board::{Board, Terrain};
///
/// let board = Board::new(4);
/// let factory = board.position_factory();
///
/// let with_peak = board.with_tiles(&[(factory.parse("b2"), Terrain::Mountain)]);
///
/// assert_eq!(board.at(factory.parse("b2")), Terrain::Empty);
/// assert_eq!(with_peak.at(factory.parse("b2")), Terrain::Mountain);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimension: i32,
    tiles: Vector<Terrain>,
}

impl Board {
    /// Create a board of the given dimension with all tiles empty.
    ///
    /// Panics if the dimension is not positive.
    #[must_use]
    pub fn new(dimension: i32) -> Self {
        assert!(dimension > 0, "Board dimension must be positive");

        let tiles = std::iter::repeat(Terrain::Empty)
            .take((dimension * dimension) as usize)
            .collect();

        Self { dimension, tiles }
    }

    /// The board dimension.
    #[must_use]
    pub const fn dimension(&self) -> i32 {
        self.dimension
    }

    /// The terrain at the given position.
    ///
    /// Positions are expected to come from this board's own factory; a
    /// position built for a different dimension indexes the wrong cell.
    #[must_use]
    pub fn at(&self, pos: BoardPos) -> Terrain {
        self.tiles[self.index(pos)]
    }

    /// A new board with the given cells replaced.
    ///
    /// The original board is unchanged.
    #[must_use]
    pub fn with_tiles(&self, overrides: &[(BoardPos, Terrain)]) -> Self {
        let mut tiles = self.tiles.clone();
        for &(pos, terrain) in overrides {
            tiles.set(self.index(pos), terrain);
        }

        Self {
            dimension: self.dimension,
            tiles,
        }
    }

    /// A position factory for this board's dimension.
    #[must_use]
    pub fn position_factory(&self) -> PositionFactory {
        PositionFactory::new(self.dimension)
    }

    fn index(&self, pos: BoardPos) -> usize {
        (pos.j() * self.dimension + pos.i()) as usize
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Board", 2)?;
        state.serialize_field("dimension", &self.dimension)?;
        state.serialize_field("tiles", &self.tiles)?;
        state.end()
    }
}
