//! Terrain tile kinds.

use serde::ser::Serializer;
use serde::Serialize;

/// A terrain tile on the board.
///
/// Serializes as `"empty"` or `"mountain"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Terrain {
    /// Open ground a troop may step onto.
    #[default]
    Empty,
    /// Impassable ground.
    Mountain,
}

impl Terrain {
    /// Whether a troop may step onto this terrain.
    #[must_use]
    pub const fn can_step_on(self) -> bool {
        match self {
            Terrain::Empty => true,
            Terrain::Mountain => false,
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Terrain::Empty => write!(f, "empty"),
            Terrain::Mountain => write!(f, "mountain"),
        }
    }
}

impl Serialize for Terrain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
