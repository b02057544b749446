//! Search algorithms over gridwalk grids.
//!
//! This crate provides the traversal toolkit built on `gridwalk-core`:
//!
//! - **Constrained BFS** shortest distance ([`shortest_distance`],
//!   [`shortest_distance_by`]) and multi-source distance maps ([`bfs_map`])
//! - **Connected components** of equal values ([`find_groups`], [`component_at`])
//! - **Path finding** between two cells ([`shortest_path`], [`all_paths`])
//! - **Loop detection** for deterministic walkers ([`does_loop_exist`], [`trace_walk`])
//! - **Cycle detection** with jump-ahead extrapolation ([`find_cycle`])
//!
//! All searches are synchronous and keep their working sets local to the
//! call. Absence is a value: an unreachable target is `None` or an empty
//! collection, never an error.
//!
//! # Neighbour enumeration
//!
//! BFS searches take a [`Pather`]. Any `Fn(Coord) -> impl IntoIterator<Item = Coord>`
//! closure is a pather; [`GridPather`] binds a grid, an adjacency and a step
//! predicate.

mod bfs;
mod cc;
mod cycle;
mod distance;
mod loops;
mod neighbors;
mod pathfind;
mod traits;

pub use bfs::{bfs_map, shortest_distance, shortest_distance_by};
pub use cc::{component_at, find_groups};
pub use cycle::{CycleResult, find_cycle};
pub use distance::{chebyshev, manhattan};
pub use loops::{Walk, WalkState, does_loop_exist, trace_walk};
pub use neighbors::Neighbors;
pub use pathfind::{all_paths, shortest_path, shortest_path_ordered};
pub use traits::{GridPather, Pather};
