//! Shortest-path and all-paths search between two grid coordinates.

use std::collections::{HashMap, HashSet, VecDeque};

use gridwalk_core::{Adjacency, Coord, Grid};

use crate::traits::{GridPather, Pather};

/// Coordinates on a shortest path from `start` to `end`, both included.
///
/// Order is not preserved; use [`shortest_path_ordered`] when it matters.
/// Returns an empty set if `end` is unreachable.
pub fn shortest_path<E, S>(
    grid: &Grid<E>,
    start: Coord,
    end: Coord,
    direction: Adjacency,
    is_step_allowed: S,
) -> HashSet<Coord>
where
    S: Fn(Coord, Coord) -> bool,
{
    shortest_path_ordered(grid, start, end, direction, is_step_allowed)
        .into_iter()
        .collect()
}

/// A shortest path from `start` to `end` in walk order, both included.
///
/// Returns an empty vec if `end` is unreachable or either endpoint lies
/// outside the grid.
pub fn shortest_path_ordered<E, S>(
    grid: &Grid<E>,
    start: Coord,
    end: Coord,
    direction: Adjacency,
    is_step_allowed: S,
) -> Vec<Coord>
where
    S: Fn(Coord, Coord) -> bool,
{
    if !grid.exists(start) || !grid.exists(end) {
        return Vec::new();
    }

    let pather = GridPather::new(grid, direction, is_step_allowed);
    let mut parents: HashMap<Coord, Coord> = HashMap::new();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(8);

    while let Some(cur) = queue.pop_front() {
        if cur == end {
            let mut path = vec![end];
            let mut at = end;
            while let Some(&p) = parents.get(&at) {
                path.push(p);
                at = p;
            }
            path.reverse();
            return path;
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);
        for &n in nbuf.iter() {
            if seen.insert(n) {
                parents.insert(n, cur);
                queue.push_back(n);
            }
        }
    }

    log::debug!("no path from {start} to {end}");
    Vec::new()
}

/// Every simple path from `start` to `end`, each listed start to end.
///
/// A coordinate is excluded only while it is on the current branch, so
/// different paths may share cells. The search keeps an explicit stack of
/// untried neighbours per depth and never recurses. The number of paths is
/// exponential in the worst case; callers bound the maze size.
pub fn all_paths<E, S>(
    grid: &Grid<E>,
    start: Coord,
    end: Coord,
    direction: Adjacency,
    is_step_allowed: S,
) -> Vec<Vec<Coord>>
where
    S: Fn(Coord, Coord) -> bool,
{
    let mut paths = Vec::new();
    if !grid.exists(start) || !grid.exists(end) {
        return paths;
    }
    if start == end {
        paths.push(vec![start]);
        return paths;
    }

    let pather = GridPather::new(grid, direction, is_step_allowed);
    let untried = |c: Coord| {
        let mut buf = Vec::with_capacity(8);
        pather.neighbors(c, &mut buf);
        buf.reverse();
        buf
    };

    let mut path = vec![start];
    let mut on_path = HashSet::from([start]);
    let mut stack = vec![untried(start)];

    while let Some(frontier) = stack.last_mut() {
        match frontier.pop() {
            None => {
                // Backtrack.
                stack.pop();
                if let Some(c) = path.pop() {
                    on_path.remove(&c);
                }
            }
            Some(next) if on_path.contains(&next) => {}
            Some(next) if next == end => {
                let mut found = path.clone();
                found.push(end);
                paths.push(found);
            }
            Some(next) => {
                path.push(next);
                on_path.insert(next);
                stack.push(untried(next));
            }
        }
    }

    log::trace!("{} paths from {start} to {end}", paths.len());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maze(rows: &[&str]) -> Grid<char> {
        Grid::from_rows(rows, |c| c).unwrap()
    }

    fn open(grid: &Grid<char>) -> impl Fn(Coord, Coord) -> bool + '_ {
        move |_, to| grid.get(to).is_some_and(|&c| c != '#')
    }

    #[test]
    fn shortest_path_through_corridor() {
        let g = maze(&["S.#", "#.#", "#.E"]);
        let path = shortest_path_ordered(
            &g,
            Coord::new(0, 0),
            Coord::new(2, 2),
            Adjacency::Cardinal,
            open(&g),
        );
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
        let set = shortest_path(
            &g,
            Coord::new(0, 0),
            Coord::new(2, 2),
            Adjacency::Cardinal,
            open(&g),
        );
        assert_eq!(set.len(), 5);
        assert!(set.contains(&Coord::new(1, 1)));
    }

    #[test]
    fn diagonal_shortcut() {
        let g = maze(&["...", "...", "..."]);
        let path = shortest_path_ordered(
            &g,
            Coord::new(0, 0),
            Coord::new(2, 2),
            Adjacency::All,
            open(&g),
        );
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn unreachable_is_empty() {
        let g = maze(&[".#.", "##.", "..."]);
        let set = shortest_path(
            &g,
            Coord::new(0, 0),
            Coord::new(2, 2),
            Adjacency::Cardinal,
            open(&g),
        );
        assert!(set.is_empty());
        assert!(
            shortest_path(
                &g,
                Coord::new(0, 0),
                Coord::new(7, 7),
                Adjacency::Cardinal,
                open(&g)
            )
            .is_empty()
        );
    }

    #[test]
    fn all_paths_in_open_square() {
        let g = maze(&["..", ".."]);
        let mut paths = all_paths(
            &g,
            Coord::new(0, 0),
            Coord::new(1, 1),
            Adjacency::Cardinal,
            open(&g),
        );
        paths.sort();
        assert_eq!(
            paths,
            vec![
                vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)],
                vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)],
            ]
        );
    }

    #[test]
    fn all_paths_counts_simple_paths() {
        // Simple paths between opposite corners of a 3x3 lattice.
        let g = maze(&["...", "...", "..."]);
        let paths = all_paths(
            &g,
            Coord::new(0, 0),
            Coord::new(2, 2),
            Adjacency::Cardinal,
            open(&g),
        );
        assert_eq!(paths.len(), 12);
        for p in &paths {
            let unique: HashSet<_> = p.iter().collect();
            assert_eq!(unique.len(), p.len());
            assert_eq!(p.first(), Some(&Coord::new(0, 0)));
            assert_eq!(p.last(), Some(&Coord::new(2, 2)));
        }
    }

    #[test]
    fn all_paths_respects_step_rule() {
        // Only rightward or downward moves.
        let g = maze(&["...", "...", "..."]);
        let monotone = |a: Coord, b: Coord| b.row >= a.row && b.col >= a.col;
        let paths = all_paths(
            &g,
            Coord::new(0, 0),
            Coord::new(2, 2),
            Adjacency::Cardinal,
            monotone,
        );
        assert_eq!(paths.len(), 6);
    }

    #[test]
    fn all_paths_trivial_and_blocked() {
        let g = maze(&[".#", "#."]);
        let same = all_paths(
            &g,
            Coord::new(0, 0),
            Coord::new(0, 0),
            Adjacency::Cardinal,
            open(&g),
        );
        assert_eq!(same, vec![vec![Coord::new(0, 0)]]);
        let none = all_paths(
            &g,
            Coord::new(0, 0),
            Coord::new(1, 1),
            Adjacency::Cardinal,
            open(&g),
        );
        assert!(none.is_empty());
    }
}
