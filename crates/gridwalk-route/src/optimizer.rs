//! The [`RouteOptimizer`] — exhaustive best-route search.

use std::collections::HashMap;

use indexmap::IndexSet;
use itertools::Itertools;

use crate::error::RouteError;
use crate::options::RouteOptions;

/// A scored ordering of locations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub stops: Vec<String>,
    pub distance: i64,
}

/// Named locations with pairwise distances.
///
/// Locations keep the order in which they first appear in the edge list.
/// Unless [`RouteOptions::UNI_DIRECTIONAL`] is set, a missing `a -> b`
/// edge falls back to `b -> a`.
#[derive(Clone, Debug)]
pub struct RouteOptimizer {
    locations: IndexSet<String>,
    edges: HashMap<(usize, usize), i64>,
    options: RouteOptions,
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Goal {
    Shortest,
    Longest,
}

impl RouteOptimizer {
    /// Build from `(from, to, distance)` edges. A repeated edge keeps the
    /// last distance given.
    pub fn new<I, S>(edges: I, options: RouteOptions) -> Self
    where
        I: IntoIterator<Item = (S, S, i64)>,
        S: Into<String>,
    {
        let mut locations = IndexSet::new();
        let mut map = HashMap::new();
        for (from, to, distance) in edges {
            let (a, _) = locations.insert_full(from.into());
            let (b, _) = locations.insert_full(to.into());
            map.insert((a, b), distance);
        }
        Self {
            locations,
            edges: map,
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> RouteOptions {
        self.options
    }

    /// Locations in first-seen order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(String::as_str)
    }

    fn missing(&self, a: usize, b: usize) -> RouteError {
        let name = |i: usize| {
            self.locations
                .get_index(i)
                .cloned()
                .unwrap_or_default()
        };
        RouteError::MissingEdge {
            from: name(a),
            to: name(b),
        }
    }

    fn edge(&self, a: usize, b: usize) -> Result<i64, RouteError> {
        if let Some(&d) = self.edges.get(&(a, b)) {
            return Ok(d);
        }
        if !self.options.contains(RouteOptions::UNI_DIRECTIONAL) {
            if let Some(&d) = self.edges.get(&(b, a)) {
                return Ok(d);
            }
        }
        Err(self.missing(a, b))
    }

    fn leg(&self, a: usize, b: usize) -> Result<i64, RouteError> {
        let there = self.edge(a, b)?;
        if self.options.contains(RouteOptions::BOTH_DIRECTIONS) {
            Ok(there + self.edge(b, a)?)
        } else {
            Ok(there)
        }
    }

    fn score(&self, stops: &[usize]) -> Result<i64, RouteError> {
        stops
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| self.leg(a, b))
            .sum()
    }

    /// Distance of the edge `from -> to`, honouring the fallback rules.
    pub fn distance(&self, from: &str, to: &str) -> Result<i64, RouteError> {
        match (
            self.locations.get_index_of(from),
            self.locations.get_index_of(to),
        ) {
            (Some(a), Some(b)) => self.edge(a, b),
            _ => Err(RouteError::MissingEdge {
                from: from.to_string(),
                to: to.to_string(),
            }),
        }
    }

    /// Total distance of visiting `stops` in order.
    pub fn route_distance(&self, stops: &[&str]) -> Result<i64, RouteError> {
        let mut total = 0;
        for (from, to) in stops.iter().tuple_windows() {
            let there = self.distance(from, to)?;
            total += if self.options.contains(RouteOptions::BOTH_DIRECTIONS) {
                there + self.distance(to, from)?
            } else {
                there
            };
        }
        Ok(total)
    }

    fn best(&self, goal: Goal) -> Result<Route, RouteError> {
        let n = self.locations.len();
        let close = goal == Goal::Longest && self.options.contains(RouteOptions::LOOPS_TO_START);
        let mut best: Option<(i64, Vec<usize>)> = None;

        for mut stops in (0..n).permutations(n) {
            if close {
                if let Some(&first) = stops.first() {
                    stops.push(first);
                }
            }
            let d = self.score(&stops)?;
            let better = match &best {
                None => true,
                Some((b, _)) => match goal {
                    Goal::Shortest => d < *b,
                    Goal::Longest => d > *b,
                },
            };
            if better {
                best = Some((d, stops));
            }
        }

        let (distance, stops) = best.unwrap_or_default();
        let stops: Vec<String> = stops
            .into_iter()
            .filter_map(|i| self.locations.get_index(i).cloned())
            .collect();
        log::debug!("best route {} = {distance}", stops.join(" -> "));
        Ok(Route { stops, distance })
    }

    /// The ordering of all locations with the smallest total distance.
    pub fn shortest_route(&self) -> Result<Route, RouteError> {
        self.best(Goal::Shortest)
    }

    /// The ordering of all locations with the largest total distance,
    /// closed back to the start under [`RouteOptions::LOOPS_TO_START`].
    pub fn longest_route(&self) -> Result<Route, RouteError> {
        self.best(Goal::Longest)
    }

    pub fn shortest_route_distance(&self) -> Result<i64, RouteError> {
        Ok(self.shortest_route()?.distance)
    }

    pub fn longest_route_distance(&self) -> Result<i64, RouteError> {
        Ok(self.longest_route()?.distance)
    }
}
