//! Unit-cost breadth-first searches.

use std::collections::{HashMap, HashSet, VecDeque};

use gridwalk_core::Coord;

use crate::traits::Pather;

/// Shortest number of steps from `start` to the nearest coordinate in
/// `ends`, where a move `a -> b` is legal only if `b` has a recorded value
/// and `value(b) <= value(a) + 1`.
///
/// Returns `None` if no end is reachable.
pub fn shortest_distance<P: Pather>(
    start: Coord,
    ends: &HashSet<Coord>,
    values: &HashMap<Coord, i64>,
    pather: &P,
) -> Option<usize> {
    shortest_distance_by(start, ends, pather, |a, b| {
        match (values.get(&a), values.get(&b)) {
            (Some(&from), Some(&to)) => to <= from + 1,
            _ => false,
        }
    })
}

/// Shortest number of steps from `start` to the nearest coordinate in
/// `ends`, taking a step `a -> b` only when `is_step_allowed(a, b)` holds.
///
/// Each coordinate is enqueued at most once, with its true distance.
pub fn shortest_distance_by<P, S>(
    start: Coord,
    ends: &HashSet<Coord>,
    pather: &P,
    mut is_step_allowed: S,
) -> Option<usize>
where
    P: Pather,
    S: FnMut(Coord, Coord) -> bool,
{
    if ends.contains(&start) {
        return Some(0);
    }

    let mut dist: HashMap<Coord, usize> = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    let mut nbuf = Vec::with_capacity(8);

    while let Some(cur) = queue.pop_front() {
        let d = dist[&cur];
        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &n in nbuf.iter() {
            if dist.contains_key(&n) || !is_step_allowed(cur, n) {
                continue;
            }
            if ends.contains(&n) {
                log::trace!("reached {n} from {start} in {} steps", d + 1);
                return Some(d + 1);
            }
            dist.insert(n, d + 1);
            queue.push_back(n);
        }
    }

    log::debug!(
        "no end reachable from {start}, explored {} coordinates",
        dist.len()
    );
    None
}

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Expansion stops when the distance exceeds
/// `max_dist`. Every reached coordinate maps to its distance from the
/// nearest source.
pub fn bfs_map<P: Pather>(pather: &P, sources: &[Coord], max_dist: usize) -> HashMap<Coord, usize> {
    let mut dist: HashMap<Coord, usize> = HashMap::new();
    let mut queue: VecDeque<Coord> = VecDeque::new();

    for &src in sources {
        if dist.contains_key(&src) {
            continue;
        }
        dist.insert(src, 0);
        queue.push_back(src);
    }

    let mut nbuf = Vec::with_capacity(8);

    while let Some(cur) = queue.pop_front() {
        let nd = dist[&cur] + 1;
        if nd > max_dist {
            continue;
        }

        nbuf.clear();
        pather.neighbors(cur, &mut nbuf);

        for &n in nbuf.iter() {
            if dist.contains_key(&n) {
                continue;
            }
            dist.insert(n, nd);
            queue.push_back(n);
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GridPather, chebyshev, manhattan};
    use gridwalk_core::{Adjacency, AdjacencySelector, Grid};
    use proptest::prelude::*;

    const HILL: [&str; 5] = ["Sabqponm", "abcryxxl", "accszExk", "acctuvwj", "abdefghi"];

    fn elevation(ch: char) -> i64 {
        match ch {
            'S' => 0,
            'E' => 25,
            c => c as i64 - 'a' as i64,
        }
    }

    fn hill() -> (Grid<char>, HashMap<Coord, i64>) {
        let grid = Grid::from_rows(&HILL, |c| c).unwrap();
        let values = grid.iter().map(|(c, &ch)| (c, elevation(ch))).collect();
        (grid, values)
    }

    #[test]
    fn climbs_hill() {
        let (grid, values) = hill();
        let start = grid.find_value(|&c| c == 'S').next().unwrap();
        let ends: HashSet<_> = grid.find_value(|&c| c == 'E').collect();
        let pather = |c: Coord| grid.neighbors(c, Adjacency::Cardinal);
        assert_eq!(shortest_distance(start, &ends, &values, &pather), Some(31));
    }

    #[test]
    fn start_in_ends_is_zero() {
        let (grid, values) = hill();
        let start = Coord::new(2, 2);
        let ends = HashSet::from([start]);
        let pather = |c: Coord| grid.neighbors(c, Adjacency::Cardinal);
        assert_eq!(shortest_distance(start, &ends, &values, &pather), Some(0));
    }

    #[test]
    fn wall_makes_end_unreachable() {
        let grid = Grid::from_rows(&["aza", "aza", "aza"], |c| c).unwrap();
        let values: HashMap<_, _> = grid.iter().map(|(c, &ch)| (c, elevation(ch))).collect();
        let ends = HashSet::from([Coord::new(2, 2)]);
        let pather = |c: Coord| grid.neighbors(c, Adjacency::Cardinal);
        assert_eq!(
            shortest_distance(Coord::new(0, 0), &ends, &values, &pather),
            None
        );
    }

    #[test]
    fn missing_values_block_steps() {
        let values = HashMap::from([(Coord::new(0, 0), 0), (Coord::new(0, 1), 1)]);
        let ends = HashSet::from([Coord::new(0, 2)]);
        let pather = |c: Coord| c.neighbors_4();
        assert_eq!(
            shortest_distance(Coord::new(0, 0), &ends, &values, &pather),
            None
        );
    }

    #[test]
    fn custom_step_rule() {
        let grid = Grid::from_rows(&["..#", ".##", "..."], |c| c).unwrap();
        let pather = GridPather::new(&grid, Adjacency::Cardinal, |_, _| true);
        let ends = HashSet::from([Coord::new(0, 1), Coord::new(2, 2)]);
        let open = |_: Coord, b: Coord| grid.get(b) == Some(&'.');
        assert_eq!(
            shortest_distance_by(Coord::new(0, 0), &ends, &pather, open),
            Some(1)
        );
        let far = HashSet::from([Coord::new(2, 2)]);
        assert_eq!(
            shortest_distance_by(Coord::new(0, 0), &far, &pather, open),
            Some(4)
        );
    }

    #[test]
    fn bfs_map_respects_max_dist() {
        let grid = Grid::filled(5, '.').unwrap();
        let pather = GridPather::new(&grid, Adjacency::Cardinal, |_, _| true);
        let map = bfs_map(&pather, &[Coord::new(0, 0), Coord::new(4, 4)], 2);
        assert_eq!(map[&Coord::new(0, 0)], 0);
        assert_eq!(map[&Coord::new(1, 1)], 2);
        assert_eq!(map[&Coord::new(3, 4)], 1);
        assert!(!map.contains_key(&Coord::new(2, 2)));
        assert!(map.values().all(|&d| d <= 2));
    }

    #[test]
    fn open_grid_distances_match_metrics() {
        let grid = Grid::filled(6, '.').unwrap();
        let src = Coord::new(2, 3);
        let cardinal = GridPather::new(&grid, Adjacency::Cardinal, |_, _| true);
        let map = bfs_map(&cardinal, &[src], usize::MAX);
        assert_eq!(map.len(), grid.len());
        for (c, d) in &map {
            assert_eq!(*d, manhattan(src, *c) as usize, "at {c}");
        }
        let all = GridPather::new(&grid, Adjacency::All, |_, _| true);
        let map = bfs_map(&all, &[src], usize::MAX);
        for (c, d) in &map {
            assert_eq!(*d, chebyshev(src, *c) as usize, "at {c}");
        }
    }

    #[test]
    fn unbounded_search_at_coordinate_limit() {
        let selector = AdjacencySelector::cardinal();
        let pather = |c: Coord| selector.neighbors(c);
        let start = Coord::new(i32::MAX, 0);
        let ends = HashSet::from([Coord::new(i32::MAX - 1, 1)]);
        let near = |a: Coord, b: Coord| b.row > 0 && manhattan(a, b) == 1;
        assert_eq!(shortest_distance_by(start, &ends, &pather, near), Some(2));
    }

    /// Length of the shortest legal walk found by exhaustive depth-first
    /// enumeration of simple paths.
    fn brute_force(
        grid: &Grid<u8>,
        cur: Coord,
        end: Coord,
        seen: &mut HashSet<Coord>,
        len: usize,
        best: &mut Option<usize>,
    ) {
        if cur == end {
            *best = Some(best.map_or(len, |b| b.min(len)));
            return;
        }
        let here = grid.at(cur).unwrap();
        for n in grid.neighbors(cur, Adjacency::Cardinal) {
            if seen.contains(&n) || *grid.at(n).unwrap() > here + 1 {
                continue;
            }
            seen.insert(n);
            brute_force(grid, n, end, seen, len + 1, best);
            seen.remove(&n);
        }
    }

    proptest! {
        #[test]
        fn bfs_matches_brute_force(
            cells in proptest::collection::vec(0u8..4, 9),
            er in 0i32..3, ec in 0i32..3,
        ) {
            let rows: Vec<Vec<u8>> = cells.chunks(3).map(<[u8]>::to_vec).collect();
            let grid = Grid::from_vec(rows).unwrap();
            let values: HashMap<Coord, i64> =
                grid.iter().map(|(c, &v)| (c, i64::from(v))).collect();
            let start = Coord::new(0, 0);
            let end = Coord::new(er, ec);
            let pather = |c: Coord| grid.neighbors(c, Adjacency::Cardinal);

            let mut best = None;
            let mut seen = HashSet::from([start]);
            brute_force(&grid, start, end, &mut seen, 0, &mut best);

            let got = shortest_distance(start, &HashSet::from([end]), &values, &pather);
            prop_assert_eq!(got, best);
        }
    }
}
