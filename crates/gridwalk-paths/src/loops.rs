//! Loop detection for deterministic walkers.
//!
//! A walker stands on a coordinate facing a direction. The caller supplies
//! the turn rule and the move rule; this module only tracks which
//! `(coordinate, direction)` states have been seen.

use std::collections::HashSet;

use gridwalk_core::{Coord, Direction, Grid};

/// A walker position: where it stands and which way it faces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkState {
    pub coord: Coord,
    pub direction: Direction,
}

/// Outcome of [`trace_walk`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Walk {
    /// Every coordinate the walker stood on.
    pub visited: HashSet<Coord>,
    /// Whether the walk revisited a state instead of terminating.
    pub looped: bool,
    /// Number of distinct states recorded.
    pub states: usize,
}

/// Run a walker from `(start, start_direction)` until it repeats a state or
/// terminates.
///
/// At each step the current state is checked against every state seen so
/// far. `next_direction` then picks the heading for this step and may turn
/// as often as it likes; `None` ends the walk. Finally `next_coord` moves
/// the walker along that heading.
pub fn trace_walk<E, D, M>(
    grid: &Grid<E>,
    start: Coord,
    start_direction: Direction,
    mut next_direction: D,
    mut next_coord: M,
) -> Walk
where
    D: FnMut(&Grid<E>, Coord, Direction) -> Option<Direction>,
    M: FnMut(&Grid<E>, Coord, Direction) -> Coord,
{
    let mut seen: HashSet<WalkState> = HashSet::new();
    let mut visited = HashSet::new();
    let mut state = WalkState {
        coord: start,
        direction: start_direction,
    };

    let looped = loop {
        if !seen.insert(state) {
            log::debug!(
                "walk from {start} loops at {} facing {} after {} states",
                state.coord,
                state.direction,
                seen.len()
            );
            break true;
        }
        visited.insert(state.coord);

        let Some(direction) = next_direction(grid, state.coord, state.direction) else {
            break false;
        };
        state = WalkState {
            coord: next_coord(grid, state.coord, direction),
            direction,
        };
    };

    Walk {
        visited,
        looped,
        states: seen.len(),
    }
}

/// Whether the walker described by `next_direction` and `next_coord`
/// revisits a `(coordinate, direction)` state.
pub fn does_loop_exist<E, D, M>(
    grid: &Grid<E>,
    start: Coord,
    start_direction: Direction,
    next_direction: D,
    next_coord: M,
) -> bool
where
    D: FnMut(&Grid<E>, Coord, Direction) -> Option<Direction>,
    M: FnMut(&Grid<E>, Coord, Direction) -> Coord,
{
    trace_walk(grid, start, start_direction, next_direction, next_coord).looped
}
