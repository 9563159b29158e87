//! Property-based tests for the position algebra.

use banneret::game::PlayingSide;
use banneret::geometry::{BoardPos, Offset, TilePos};
use proptest::prelude::*;

proptest! {
    /// Stepping always yields either a position strictly inside the grid
    /// or exactly the off-board value, and on-board results agree with
    /// plain coordinate arithmetic.
    #[test]
    fn prop_step_in_bounds_or_off_board(
        dim in 1i32..9,
        i in 0i32..9,
        j in 0i32..9,
        dx in -3i32..4,
        dy in -3i32..4,
    ) {
        prop_assume!(i < dim && j < dim);
        let pos = BoardPos::new(dim, i, j).unwrap();

        match pos.step(Offset::new(dx, dy)) {
            TilePos::OnBoard(stepped) => {
                prop_assert!((0..dim).contains(&stepped.i()));
                prop_assert!((0..dim).contains(&stepped.j()));
                prop_assert_eq!(stepped.i(), i + dx);
                prop_assert_eq!(stepped.j(), j + dy);
            }
            TilePos::OffBoard => {
                let inside = (0..dim).contains(&(i + dx)) && (0..dim).contains(&(j + dy));
                prop_assert!(!inside);
            }
        }
    }

    /// BLUE steps exactly as authored; ORANGE steps with the vertical
    /// component mirrored.
    #[test]
    fn prop_mirroring_symmetry(
        dim in 1i32..9,
        i in 0i32..9,
        j in 0i32..9,
        dx in -3i32..4,
        dy in -3i32..4,
    ) {
        prop_assume!(i < dim && j < dim);
        let pos = BoardPos::new(dim, i, j).unwrap();
        let offset = Offset::new(dx, dy);

        prop_assert_eq!(
            pos.step_by_playing_side(offset, PlayingSide::Blue),
            pos.step(offset)
        );
        prop_assert_eq!(
            pos.step_by_playing_side(offset, PlayingSide::Orange),
            pos.step(offset.y_flipped())
        );
    }

    /// Stepping from off-board always fails.
    #[test]
    fn prop_off_board_is_terminal(dx in -3i32..4, dy in -3i32..4) {
        prop_assert!(TilePos::OffBoard.step(Offset::new(dx, dy)).is_err());
        prop_assert!(TilePos::OffBoard
            .step_by_playing_side(Offset::new(dx, dy), PlayingSide::Blue)
            .is_err());
    }

    /// Every neighbour is on the board, adjacent, and adjacency is
    /// symmetric; there are never more than four.
    #[test]
    fn prop_neighbours_adjacent(dim in 1i32..9, i in 0i32..9, j in 0i32..9) {
        prop_assume!(i < dim && j < dim);
        let pos = BoardPos::new(dim, i, j).unwrap();

        let neighbours = pos.neighbours();
        prop_assert!(neighbours.len() <= 4);

        for neighbour in neighbours {
            prop_assert!(pos.is_next_to(neighbour));
            prop_assert!(neighbour.is_next_to(pos));
            prop_assert!((0..dim).contains(&neighbour.i()));
            prop_assert!((0..dim).contains(&neighbour.j()));
        }
    }

    /// Display strings round-trip through the factory.
    #[test]
    fn prop_display_round_trip(dim in 1i32..9, i in 0i32..9, j in 0i32..9) {
        prop_assume!(i < dim && j < dim);
        let pos = BoardPos::new(dim, i, j).unwrap();
        let factory = banneret::geometry::PositionFactory::new(dim);

        prop_assert_eq!(factory.parse(&pos.to_string()), pos);
    }
}
