//! Troop orientation.

use serde::ser::Serializer;
use serde::Serialize;

/// The two-sided orientation of a placed troop.
///
/// The face selects which pivot and action list are active. It flips each
/// time the piece completes a step or captures without moving. Serializes
/// as `"AVERS"` or `"REVERS"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TroopFace {
    /// The front face; every troop is placed avers up.
    Avers,
    /// The back face.
    Revers,
}

impl TroopFace {
    /// The opposite face.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            TroopFace::Avers => TroopFace::Revers,
            TroopFace::Revers => TroopFace::Avers,
        }
    }
}

impl std::fmt::Display for TroopFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TroopFace::Avers => write!(f, "AVERS"),
            TroopFace::Revers => write!(f, "REVERS"),
        }
    }
}

impl Serialize for TroopFace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
