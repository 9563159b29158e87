//! Position construction for a fixed board dimension.

use super::position::BoardPos;

/// Builds [`BoardPos`] values for one board dimension.
///
/// Positions can be built from raw indices, from a display column and row,
/// or from a display string like `"a1"`. Out-of-range inputs panic: the
/// factory exists for setup and test code that knows its coordinates.
///
/// ## Example
///
/// ```
/// use banneret::geometry::PositionFactory;
///
/// let factory = PositionFactory::new(4);
///
/// assert_eq!(factory.pos(0, 0), factory.parse("a1"));
/// assert_eq!(factory.pos_at('d', 4), factory.pos(3, 3));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PositionFactory {
    dimension: i32,
}

impl PositionFactory {
    /// Create a factory for the given board dimension.
    ///
    /// Panics if the dimension is not positive.
    #[must_use]
    pub fn new(dimension: i32) -> Self {
        assert!(dimension > 0, "Board dimension must be positive");
        Self { dimension }
    }

    /// The board dimension this factory builds positions for.
    #[must_use]
    pub const fn dimension(self) -> i32 {
        self.dimension
    }

    /// Build a position from raw column and row indices.
    ///
    /// Panics if the indices fall outside the board.
    #[must_use]
    pub fn pos(self, i: i32, j: i32) -> BoardPos {
        BoardPos::new(self.dimension, i, j)
            .unwrap_or_else(|| panic!("({i}, {j}) is outside a {0}x{0} board", self.dimension))
    }

    /// Build a position from a display column character and 1-based row.
    ///
    /// Panics if the coordinates fall outside the board.
    #[must_use]
    pub fn pos_at(self, column: char, row: i32) -> BoardPos {
        self.pos(i32::from(column as u8) - i32::from(b'a'), row - 1)
    }

    /// Build a position from a display string such as `"a1"`.
    ///
    /// Panics on malformed input or coordinates outside the board.
    #[must_use]
    pub fn parse(self, pos: &str) -> BoardPos {
        let mut chars = pos.chars();
        let column = chars.next().unwrap_or_else(|| panic!("Empty position string"));
        let row: i32 = chars
            .as_str()
            .parse()
            .unwrap_or_else(|_| panic!("Malformed position string {pos:?}"));

        self.pos_at(column, row)
    }
}
