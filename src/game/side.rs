//! The two playing sides.

use serde::ser::Serializer;
use serde::Serialize;

/// One of the two players.
///
/// BLUE plays from the bottom of the board (home row 1) and ORANGE from the
/// top (home row equal to the board dimension). Serializes as `"BLUE"` or
/// `"ORANGE"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayingSide {
    /// The side playing from row 1.
    Blue,
    /// The side playing from the far row.
    Orange,
}

impl PlayingSide {
    /// The opposing side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            PlayingSide::Blue => PlayingSide::Orange,
            PlayingSide::Orange => PlayingSide::Blue,
        }
    }
}

impl std::fmt::Display for PlayingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayingSide::Blue => write!(f, "BLUE"),
            PlayingSide::Orange => write!(f, "ORANGE"),
        }
    }
}

impl Serialize for PlayingSide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
