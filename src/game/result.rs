//! Game outcome states.

use serde::ser::Serializer;
use serde::Serialize;

/// The current outcome of a game.
///
/// `Victory` and `Draw` are terminal: once reached, every legality predicate
/// returns false and no further board mutation is possible. Serializes as
/// `"IN_PLAY"`, `"VICTORY"`, or `"DRAW"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// The game is still being played.
    InPlay,
    /// One side has won, by capturing the enemy leader or by the opponent
    /// resigning.
    Victory,
    /// The game ended without a winner.
    Draw,
}

impl GameResult {
    /// Whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InPlay)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InPlay => write!(f, "IN_PLAY"),
            GameResult::Victory => write!(f, "VICTORY"),
            GameResult::Draw => write!(f, "DRAW"),
        }
    }
}

impl Serialize for GameResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal() {
        assert!(!GameResult::InPlay.is_terminal());
        assert!(GameResult::Victory.is_terminal());
        assert!(GameResult::Draw.is_terminal());
    }

    #[test]
    fn test_serialization() {
        assert_eq!(
            serde_json::to_string(&GameResult::InPlay).unwrap(),
            "\"IN_PLAY\""
        );
        assert_eq!(
            serde_json::to_string(&GameResult::Victory).unwrap(),
            "\"VICTORY\""
        );
        assert_eq!(serde_json::to_string(&GameResult::Draw).unwrap(), "\"DRAW\"");
    }
}
