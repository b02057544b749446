//! Declarative neighbour selection: [`Adjacency`] and [`AdjacencySelector`].

use crate::geom::Coord;

/// Which kind of neighbours are of interest.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// Cardinal and diagonal (8-neighbourhood).
    All,
    /// Up, right, down, left.
    #[default]
    Cardinal,
    /// The four diagonals only.
    Diagonal,
}

impl Adjacency {
    /// Whether an offset of `(drow, dcol)` belongs to this neighbourhood.
    ///
    /// The zero offset is never a member; see
    /// [`AdjacencySelector::with_self`] for including the centre.
    #[inline]
    pub const fn includes(self, drow: i32, dcol: i32) -> bool {
        if drow < -1 || drow > 1 || dcol < -1 || dcol > 1 || (drow == 0 && dcol == 0) {
            return false;
        }
        let diagonal = drow != 0 && dcol != 0;
        match self {
            Self::All => true,
            Self::Cardinal => !diagonal,
            Self::Diagonal => diagonal,
        }
    }
}

/// Configuration describing which neighbours of a coordinate are returned.
///
/// When bounded, neighbours outside `[0, rows) x [0, cols)` are dropped.
/// Unbounded selectors return every adjacent coordinate and leave filtering
/// to the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencySelector {
    pub include_self: bool,
    pub direction: Adjacency,
    /// `(rows, cols)` extent; `None` means unbounded.
    pub bounds: Option<(i32, i32)>,
}

impl AdjacencySelector {
    /// Unbounded selector for `direction`, excluding the centre.
    #[inline]
    pub const fn new(direction: Adjacency) -> Self {
        Self {
            include_self: false,
            direction,
            bounds: None,
        }
    }

    #[inline]
    pub const fn cardinal() -> Self {
        Self::new(Adjacency::Cardinal)
    }

    #[inline]
    pub const fn diagonal() -> Self {
        Self::new(Adjacency::Diagonal)
    }

    #[inline]
    pub const fn all() -> Self {
        Self::new(Adjacency::All)
    }

    /// Include the centre coordinate itself (builder).
    #[inline]
    pub const fn with_self(mut self) -> Self {
        self.include_self = true;
        self
    }

    /// Bound to a square grid of side `size` (builder).
    #[inline]
    pub const fn bounded(self, size: i32) -> Self {
        self.within(size, size)
    }

    /// Bound to a `rows x cols` grid (builder).
    #[inline]
    pub const fn within(mut self, rows: i32, cols: i32) -> Self {
        self.bounds = Some((rows, cols));
        self
    }

    /// Whether out-of-range neighbours are dropped.
    #[inline]
    pub const fn is_bounded(&self) -> bool {
        self.bounds.is_some()
    }

    #[inline]
    fn admits(&self, c: Coord) -> bool {
        match self.bounds {
            Some((rows, cols)) => c.row >= 0 && c.col >= 0 && c.row < rows && c.col < cols,
            None => true,
        }
    }

    /// Neighbours of `c`, in row-major offset order.
    pub fn neighbors(&self, c: Coord) -> Vec<Coord> {
        let mut out = Vec::with_capacity(9);
        for drow in -1..=1 {
            for dcol in -1..=1 {
                let member = if drow == 0 && dcol == 0 {
                    self.include_self
                } else {
                    self.direction.includes(drow, dcol)
                };
                if !member {
                    continue;
                }
                let n = c.shift(drow, dcol);
                if self.admits(n) {
                    out.push(n);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        assert!(Adjacency::Cardinal.includes(0, 1));
        assert!(!Adjacency::Cardinal.includes(1, 1));
        assert!(Adjacency::Diagonal.includes(-1, 1));
        assert!(!Adjacency::Diagonal.includes(-1, 0));
        assert!(Adjacency::All.includes(1, -1));
        assert!(!Adjacency::All.includes(0, 0));
        assert!(!Adjacency::All.includes(2, 0));
    }

    #[test]
    fn unbounded_returns_negative_coords() {
        let n = AdjacencySelector::cardinal().neighbors(Coord::ZERO);
        assert_eq!(n.len(), 4);
        assert!(n.contains(&Coord::new(-1, 0)));
        assert!(n.contains(&Coord::new(0, -1)));
    }

    #[test]
    fn bounded_drops_outside() {
        let sel = AdjacencySelector::all().bounded(3);
        let n = sel.neighbors(Coord::ZERO);
        assert_eq!(
            n,
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
        let n = sel.neighbors(Coord::new(1, 1));
        assert_eq!(n.len(), 8);
    }

    #[test]
    fn include_self() {
        let sel = AdjacencySelector::diagonal().with_self().bounded(5);
        let n = sel.neighbors(Coord::new(2, 2));
        assert_eq!(n.len(), 5);
        assert!(n.contains(&Coord::new(2, 2)));
        assert!(n.contains(&Coord::new(1, 1)));
        assert!(!n.contains(&Coord::new(1, 2)));
    }

    #[test]
    fn rectangular_bounds() {
        let sel = AdjacencySelector::cardinal().within(1, 3);
        let n = sel.neighbors(Coord::new(0, 1));
        assert_eq!(n, vec![Coord::new(0, 0), Coord::new(0, 2)]);
    }
}
