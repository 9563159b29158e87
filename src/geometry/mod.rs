//! Position and offset primitives.
//!
//! Pure value types with no game knowledge. [`BoardPos`] is a coordinate
//! inside a bounded square grid; [`TilePos`] widens it with an explicit
//! off-board variant so boundary conditions can be expressed as ordinary
//! value comparisons rather than nullable checks scattered through the
//! rules code.

pub mod factory;
pub mod offset;
pub mod position;

pub use factory::PositionFactory;
pub use offset::Offset;
pub use position::{BoardPos, TilePos};
