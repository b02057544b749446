//! Connected-component labelling.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use gridwalk_core::{Adjacency, Coord, Grid};

use crate::neighbors::Neighbors;

#[inline]
fn flat<E>(grid: &Grid<E>, c: Coord) -> usize {
    c.row as usize * grid.cols() + c.col as usize
}

/// Partition every cell into maximal groups of equal, cardinally-connected
/// values.
///
/// The result maps each distinct value to its components. A coordinate
/// belongs to exactly one component. Order within a value is unspecified.
pub fn find_groups<E>(grid: &Grid<E>) -> HashMap<E, Vec<HashSet<Coord>>>
where
    E: Eq + Hash + Clone,
{
    let mut groups: HashMap<E, Vec<HashSet<Coord>>> = HashMap::new();
    let mut visited = vec![false; grid.len()];
    let mut nb = Neighbors::new();
    let mut stack = Vec::new();

    for (start, value) in grid.iter() {
        if visited[flat(grid, start)] {
            continue;
        }

        // Iterative DFS from `start`.
        let mut component = HashSet::from([start]);
        visited[flat(grid, start)] = true;
        stack.clear();
        stack.push(start);

        while let Some(cur) = stack.pop() {
            for &n in nb.cardinal(cur, |n| grid.get(n) == Some(value)) {
                let i = flat(grid, n);
                if !visited[i] {
                    visited[i] = true;
                    component.insert(n);
                    stack.push(n);
                }
            }
        }

        groups.entry(value.clone()).or_default().push(component);
    }

    log::trace!(
        "{} components over {} values",
        groups.values().map(Vec::len).sum::<usize>(),
        groups.len()
    );
    groups
}

/// Flood-fill from a single coordinate and return the set of connected
/// cells holding the same value.
///
/// Returns an empty set if `start` is outside the grid.
pub fn component_at<E: PartialEq>(grid: &Grid<E>, start: Coord) -> HashSet<Coord> {
    let mut result = HashSet::new();
    let Some(value) = grid.get(start) else {
        return result;
    };

    let selector = grid.selector(Adjacency::Cardinal);
    let mut nb = Neighbors::new();
    let mut stack = vec![start];
    result.insert(start);

    while let Some(cur) = stack.pop() {
        for &n in nb.select(&selector, cur, |n| grid.get(n) == Some(value)) {
            if result.insert(n) {
                stack.push(n);
            }
        }
    }

    result
}
