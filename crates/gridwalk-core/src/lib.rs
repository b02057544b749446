//! **gridwalk-core** — coordinates, adjacency and dense grids.
//!
//! This crate provides the foundational types used across the *gridwalk*
//! crates: the [`Coord`] value type, cardinal [`Direction`]s, declarative
//! neighbour selection with [`AdjacencySelector`], and the copy-on-update
//! [`Grid`] container.

pub mod adjacency;
pub mod error;
pub mod geom;
pub mod grid;

pub use adjacency::{Adjacency, AdjacencySelector};
pub use error::GridError;
pub use geom::{Coord, Direction, Rotation};
pub use grid::Grid;
